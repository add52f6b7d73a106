use yew::prelude::*;

use crate::config::TouchScrollConfig;
use crate::model::ScrollPolicy;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub policy: ScrollPolicy,
    pub on_policy: Callback<ScrollPolicy>,
    pub config: TouchScrollConfig,
    pub on_config: Callback<TouchScrollConfig>,
    pub on_reset: Callback<()>,
}

const FRAME_STEP: u32 = 5;
const THRESHOLD_STEP: f64 = 5.0;

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle = |f: fn(&mut ScrollPolicy)| {
        let cb = props.on_policy.clone();
        let policy = props.policy;
        Callback::from(move |_: MouseEvent| {
            let mut p = policy;
            f(&mut p);
            cb.emit(p);
        })
    };
    let toggle_x_cb = toggle(|p| p.scroll_x = !p.scroll_x);
    let toggle_y_cb = toggle(|p| p.scroll_y = !p.scroll_y);
    let toggle_lock_cb = toggle(|p| p.lock_axis = !p.lock_axis);
    let toggle_stop_cb = toggle(|p| p.stop_propagation = !p.stop_propagation);

    let adjust = |frames: i64, threshold: f64| {
        let cb = props.on_config.clone();
        let config = props.config;
        Callback::from(move |_: MouseEvent| {
            let next = TouchScrollConfig {
                frames: (config.frames as i64 + frames).clamp(1, 240) as u32,
                immediate_threshold: (config.immediate_threshold + threshold).clamp(0.0, 200.0),
            };
            cb.emit(next);
        })
    };
    let frames_down = adjust(-(FRAME_STEP as i64), 0.0);
    let frames_up = adjust(FRAME_STEP as i64, 0.0);
    let threshold_down = adjust(0, -THRESHOLD_STEP);
    let threshold_up = adjust(0, THRESHOLD_STEP);

    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let p = props.policy;
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Touch Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={p.scroll_x} onclick={toggle_x_cb} />
                    <span>{"Scroll Horizontally"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={p.scroll_y} onclick={toggle_y_cb} />
                    <span>{"Scroll Vertically"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={p.lock_axis} onclick={toggle_lock_cb} />
                    <span>{"Lock To Dominant Axis"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={p.stop_propagation} onclick={toggle_stop_cb} />
                    <span>{"Stop Propagation"}</span>
                </label>
            </div>
            <div style="display:flex; flex-direction:column; gap:8px; font-variant-numeric:tabular-nums;">
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Easing Frames"}</span>
                    <button onclick={frames_down}>{"-"}</button>
                    <span style="min-width:40px; text-align:center;">{ props.config.frames }</span>
                    <button onclick={frames_up}>{"+"}</button>
                </div>
                <div style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Raw Delivery Below (px)"}</span>
                    <button onclick={threshold_down}>{"-"}</button>
                    <span style="min-width:40px; text-align:center;">{ format!("{:.0}", props.config.immediate_threshold) }</span>
                    <button onclick={threshold_up}>{"+"}</button>
                </div>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
        </div>
    </div>}
}

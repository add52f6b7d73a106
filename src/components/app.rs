use super::{
    delivery_panel::DeliveryPanel, settings_modal::SettingsModal,
    touch_scroll_view::TouchScrollView,
};
use crate::config::TouchScrollConfig;
use crate::model::{DeliveryLog, LogAction, ScrollPolicy};
use yew::prelude::*;

const POLICY_KEY: &str = "ts_scroll_policy";

fn load_policy() -> ScrollPolicy {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(POLICY_KEY) {
                if let Ok(p) = serde_json::from_str(&raw) {
                    return p;
                }
            }
        }
    }
    ScrollPolicy::default()
}

#[function_component(App)]
pub fn app() -> Html {
    let policy = use_state(load_policy);
    let config = use_state(TouchScrollConfig::load);
    let log = use_reducer(DeliveryLog::default);
    let open_settings = use_state(|| false);

    // Persist policy changes
    {
        let policy = policy.clone();
        use_effect_with(*policy, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(&*policy) {
                        let _ = store.set_item(POLICY_KEY, &s);
                    }
                }
            }
            || ()
        });
    }
    // Persist config changes
    {
        let config = config.clone();
        use_effect_with(*config, move |_| {
            config.save();
            || ()
        });
    }

    let on_scroll = {
        let log = log.clone();
        Callback::from(move |(x, y): (f64, f64)| log.dispatch(LogAction::Push { x, y }))
    };
    let on_clear = {
        let log = log.clone();
        Callback::from(move |_| log.dispatch(LogAction::Clear))
    };
    let toggle_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(!*open_settings))
    };
    let close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let on_policy = {
        let policy = policy.clone();
        Callback::from(move |p: ScrollPolicy| policy.set(p))
    };
    let on_config = {
        let config = config.clone();
        Callback::from(move |c: TouchScrollConfig| {
            if c.validate().is_ok() {
                config.set(c);
            }
        })
    };
    let on_reset = {
        let policy = policy.clone();
        let config = config.clone();
        Callback::from(move |_| {
            policy.set(ScrollPolicy::default());
            config.set(TouchScrollConfig::default());
        })
    };

    let rows = (0..60).map(|i| {
        let bg = if i % 2 == 0 { "#161b22" } else { "#0d1117" };
        html! {
            <div key={i} style={format!("height:48px; display:flex; align-items:center; padding:0 16px; background:{};", bg)}>
                { format!("Row {}", i + 1) }
            </div>
        }
    });

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <TouchScrollView
                on_scroll={on_scroll}
                policy={*policy}
                config={*config}
                style="position:absolute; inset:0; overflow:hidden; touch-action:none;"
            >
                { for rows }
            </TouchScrollView>
            <DeliveryPanel log={(*log).clone()} on_clear={on_clear} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
                <button onclick={toggle_settings}>{"Settings"}</button>
            </div>
            <SettingsModal
                show={*open_settings}
                on_close={close_settings}
                policy={*policy}
                on_policy={on_policy}
                config={*config}
                on_config={on_config}
                on_reset={on_reset}
            />
        </div>
    }
}

use yew::prelude::*;

use crate::model::DeliveryLog;
use crate::util::format_pair;

#[derive(Properties, PartialEq, Clone)]
pub struct DeliveryPanelProps {
    pub log: DeliveryLog,
    pub on_clear: Callback<()>,
}

// Readout of the most recent on_touch_scroll deliveries, newest first
#[function_component]
pub fn DeliveryPanel(props: &DeliveryPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // seq | pair
    let seq_style = "width:36px; text-align:right; opacity:0.6; flex-shrink:0;";
    let value_style = "flex:1; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:6px; font-size:13px;">
            <div style={row_style}>
                <span style="flex:1; font-weight:500; color:#58a6ff;">{"Deliveries"}</span>
                <span style={value_style}>{ props.log.total }</span>
                <button onclick={clear_cb} style="padding:2px 6px; font-size:11px;">{"Clear"}</button>
            </div>
            <div style={format!("{} color:#d4af37;", row_style)}>
                <span style="flex:1;">{"Sum"}</span>
                <span style={value_style}>{ format_pair(props.log.accum_x, props.log.accum_y) }</span>
            </div>
            { for props.log.entries.iter().map(|d| html! {
                <div style={row_style} key={d.seq}>
                    <span style={seq_style}>{ format!("#{}", d.seq) }</span>
                    <span style={value_style}>{ format_pair(d.x, d.y) }</span>
                </div>
            }) }
        </div>
    }
}

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::config::TouchScrollConfig;
use crate::frame::RafScheduler;
use crate::model::ScrollPolicy;
use crate::state::{AxisPredicate, TouchScrollHandler};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchScrollViewProps {
    pub on_scroll: Callback<(f64, f64)>,
    #[prop_or_default]
    pub policy: ScrollPolicy,
    #[prop_or_default]
    pub config: TouchScrollConfig,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

fn axis_predicate(enabled: bool, lock_axis: bool) -> AxisPredicate {
    match (enabled, lock_axis) {
        (false, _) => false.into(),
        (true, true) => AxisPredicate::dominant(),
        (true, false) => true.into(),
    }
}

/// Wraps its children in a touch surface that reports scrolls through `on_scroll`.
/// One handler lives per (policy, config); changing either rebinds and cancels any run in flight.
#[function_component(TouchScrollView)]
pub fn touch_scroll_view(props: &TouchScrollViewProps) -> Html {
    let node_ref = use_node_ref();
    // latest callback, so a parent re-render does not rebind the listeners
    let on_scroll_ref = use_mut_ref(|| props.on_scroll.clone());
    *on_scroll_ref.borrow_mut() = props.on_scroll.clone();

    {
        let node_ref = node_ref.clone();
        let on_scroll_ref = on_scroll_ref.clone();
        use_effect_with((props.policy, props.config), move |&(policy, config)| {
            let mut teardown: Option<Box<dyn FnOnce()>> = None;
            if let Some(el) = node_ref.cast::<HtmlElement>() {
                match RafScheduler::new() {
                    Ok(scheduler) => {
                        let on_scroll = on_scroll_ref.clone();
                        let built = TouchScrollHandler::with_config(
                            move |x, y| on_scroll.borrow().emit((x, y)),
                            axis_predicate(policy.scroll_x, policy.lock_axis),
                            axis_predicate(policy.scroll_y, policy.lock_axis),
                            policy.stop_propagation,
                            scheduler,
                            config,
                        );
                        match built {
                            Ok(handler) => teardown = Some(bind(&el, Rc::new(handler))),
                            Err(e) => clog(&format!("touch scroll disabled: {e}")),
                        }
                    }
                    Err(e) => clog(&format!("touch scroll disabled: {e}")),
                }
            }
            move || {
                if let Some(f) = teardown {
                    f();
                }
            }
        });
    }

    html! {
        <div ref={node_ref} style={props.style.clone()}>
            { props.children.clone() }
        </div>
    }
}

// Attach touch listeners; the returned closure removes them and cancels the handler.
fn bind(el: &HtmlElement, handler: Rc<TouchScrollHandler>) -> Box<dyn FnOnce()> {
    let touch_start_cb = {
        let handler = handler.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            handler.on_touch_start(&e);
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    let touch_move_cb = {
        let handler = handler.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Err(err) = handler.on_touch_move(&e) {
                clog(&format!("touch scroll: {err}"));
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    let touch_end_cb = {
        let handler = handler.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            handler.on_touch_end(&e);
        }) as Box<dyn FnMut(TouchEvent)>)
    };

    // preventDefault on touchmove only works on a non-passive listener
    let move_opts = AddEventListenerOptions::new();
    move_opts.set_passive(false);

    el.add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
        .ok();
    el.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        touch_move_cb.as_ref().unchecked_ref(),
        &move_opts,
    )
    .ok();
    el.add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
        .ok();
    el.add_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref())
        .ok();

    let el = el.clone();
    Box::new(move || {
        let _ = el.remove_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref());
        let _ = el.remove_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref());
        let _ = el.remove_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref());
        let _ = el.remove_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref());
        handler.cancel();
    })
}

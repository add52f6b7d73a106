//! UI-side data for the demo: which scroll policies are active and the
//! recent deliveries made by the touch handler.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;
use yew::Reducible;

pub const LOG_CAPACITY: usize = 12;

/// Axis/propagation toggles for the scroll surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollPolicy {
    pub scroll_x: bool,
    pub scroll_y: bool,
    /// Only the dominant axis of a move consumes it.
    pub lock_axis: bool,
    pub stop_propagation: bool,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            scroll_x: true,
            scroll_y: true,
            lock_axis: false,
            stop_propagation: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delivery {
    pub seq: u64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DeliveryLog {
    pub entries: VecDeque<Delivery>,
    pub total: u64,
    /// Sum of every delivered pair; lets the view drift with the gesture.
    pub accum_x: f64,
    pub accum_y: f64,
}

pub enum LogAction {
    Push { x: f64, y: f64 },
    Clear,
}

impl Reducible for DeliveryLog {
    type Action = LogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            LogAction::Push { x, y } => {
                new.total += 1;
                new.accum_x += x;
                new.accum_y += y;
                new.entries.push_front(Delivery { seq: new.total, x, y });
                new.entries.truncate(LOG_CAPACITY);
            }
            LogAction::Clear => {
                new = DeliveryLog::default();
            }
        }
        Rc::new(new)
    }
}

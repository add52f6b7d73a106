//! Shared fixtures: a fake touch event and a handler wired to a manual scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew_touch_scroll::{
    AxisPredicate, ManualScheduler, PropagationPredicate, TouchInput, TouchPoint,
    TouchScrollConfig, TouchScrollHandler,
};

#[derive(Default)]
pub struct FakeTouch {
    point: Option<TouchPoint>,
    prevented: Cell<bool>,
    stopped: Cell<bool>,
}

impl FakeTouch {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            point: Some(TouchPoint::new(x, y)),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prevented(&self) -> bool {
        self.prevented.get()
    }

    pub fn stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl TouchInput for FakeTouch {
    fn first_touch(&self) -> Option<TouchPoint> {
        self.point
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }
}

pub type Calls = Rc<RefCell<Vec<(f64, f64)>>>;

pub struct Harness {
    pub handler: TouchScrollHandler<ManualScheduler>,
    pub scheduler: ManualScheduler,
    pub calls: Calls,
}

impl Harness {
    pub fn calls(&self) -> Vec<(f64, f64)> {
        self.calls.borrow().clone()
    }

    pub fn start(&self, x: f64, y: f64) {
        self.handler.on_touch_start(&FakeTouch::at(x, y));
    }
}

pub fn harness(
    handle_x: impl Into<AxisPredicate>,
    handle_y: impl Into<AxisPredicate>,
    stop: impl Into<PropagationPredicate>,
) -> Harness {
    harness_with(handle_x, handle_y, stop, TouchScrollConfig::default())
}

pub fn harness_with(
    handle_x: impl Into<AxisPredicate>,
    handle_y: impl Into<AxisPredicate>,
    stop: impl Into<PropagationPredicate>,
    config: TouchScrollConfig,
) -> Harness {
    let scheduler = ManualScheduler::new();
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let handler = TouchScrollHandler::with_config(
        move |x, y| sink.borrow_mut().push((x, y)),
        handle_x,
        handle_y,
        stop,
        scheduler.clone(),
        config,
    )
    .expect("valid config");
    Harness {
        handler,
        scheduler,
        calls,
    }
}

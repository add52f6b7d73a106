//! Touch scroll translator.
//!
//! Turns touch-start/touch-move events into `on_touch_scroll(x, y)` calls.
//! Small gestures are delivered raw; larger ones are spread over an easing run
//! driven by the frame scheduler, one delivery per frame.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::config::TouchScrollConfig;
use crate::error::{ConfigError, FrameError, TouchScrollError};
use crate::frame::{FrameHandle, FrameScheduler, RafScheduler};
use crate::input::{TouchInput, TouchPoint};

use super::gesture::{FrameStep, GestureState, MoveOutcome, Phase};
use super::predicate::{AxisPredicate, PropagationPredicate};

struct Shared<S> {
    state: RefCell<GestureState>,
    on_touch_scroll: Box<dyn Fn(f64, f64)>,
    handle_scroll_x: AxisPredicate,
    handle_scroll_y: AxisPredicate,
    stop_propagation: PropagationPredicate,
    scheduler: S,
    config: TouchScrollConfig,
}

/// One handler per scrollable element. Dropping it cancels any pending frame.
pub struct TouchScrollHandler<S: FrameScheduler + 'static = RafScheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: FrameScheduler + 'static> TouchScrollHandler<S> {
    pub fn new(
        on_touch_scroll: impl Fn(f64, f64) + 'static,
        handle_scroll_x: impl Into<AxisPredicate>,
        handle_scroll_y: impl Into<AxisPredicate>,
        stop_propagation: impl Into<PropagationPredicate>,
        scheduler: S,
    ) -> Self {
        Self::build(
            Box::new(on_touch_scroll),
            handle_scroll_x.into(),
            handle_scroll_y.into(),
            stop_propagation.into(),
            scheduler,
            TouchScrollConfig::default(),
        )
    }

    pub fn with_config(
        on_touch_scroll: impl Fn(f64, f64) + 'static,
        handle_scroll_x: impl Into<AxisPredicate>,
        handle_scroll_y: impl Into<AxisPredicate>,
        stop_propagation: impl Into<PropagationPredicate>,
        scheduler: S,
        config: TouchScrollConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            Box::new(on_touch_scroll),
            handle_scroll_x.into(),
            handle_scroll_y.into(),
            stop_propagation.into(),
            scheduler,
            config,
        ))
    }

    fn build(
        on_touch_scroll: Box<dyn Fn(f64, f64)>,
        handle_scroll_x: AxisPredicate,
        handle_scroll_y: AxisPredicate,
        stop_propagation: PropagationPredicate,
        scheduler: S,
        config: TouchScrollConfig,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(GestureState::new()),
                on_touch_scroll,
                handle_scroll_x,
                handle_scroll_y,
                stop_propagation,
                scheduler,
                config,
            }),
        }
    }

    pub fn on_touch_start(&self, event: &impl TouchInput) {
        let Some(point) = event.first_touch() else {
            trace!("touchstart without contact ignored");
            return;
        };
        self.shared.state.borrow_mut().touch_start(point);
    }

    pub fn on_touch_move(&self, event: &impl TouchInput) -> Result<MoveOutcome, TouchScrollError> {
        let Some(point) = event.first_touch() else {
            trace!("touchmove without contact ignored");
            return Ok(MoveOutcome::NoContact);
        };
        let shared = &self.shared;
        let (dx, dy) = shared.state.borrow().deltas_for(point);

        // no borrow held: predicates may query the handler
        let accept_x = shared.handle_scroll_x.evaluate(dx, dy);
        let accept_y = shared.handle_scroll_y.evaluate(dy, dx);
        if !accept_x && !accept_y {
            return Ok(MoveOutcome::Rejected);
        }

        shared
            .state
            .borrow_mut()
            .accept_move(point, (dx, dy), accept_x, accept_y);
        event.prevent_default();

        if dx == 0.0 && dy == 0.0 {
            return Ok(MoveOutcome::Unchanged);
        }
        if shared.stop_propagation.evaluate() {
            event.stop_propagation();
        }
        if shared.state.borrow().pending_frame.is_some() {
            trace!(dx, dy, "easing run in flight, move not rescheduled");
            return Ok(MoveOutcome::Pending);
        }
        start_delivery(shared)
    }

    /// Ends tracking. An easing run in flight keeps going.
    pub fn on_touch_end(&self, _event: &impl TouchInput) {
        self.shared.state.borrow_mut().touch_end();
    }

    /// Cancels the pending frame and resets the gesture. Safe to call repeatedly.
    pub fn cancel(&self) {
        let pending = self.shared.state.borrow_mut().reset();
        if let Some(handle) = pending {
            debug!(handle = handle.0, "cancelling pending scroll frame");
            self.shared.scheduler.cancel(handle);
        }
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.borrow().phase
    }

    pub fn is_animating(&self) -> bool {
        self.shared.state.borrow().is_easing()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.shared.state.borrow().pending_frame
    }

    pub fn reference_point(&self) -> TouchPoint {
        let s = self.shared.state.borrow();
        TouchPoint::new(s.start_x, s.start_y)
    }

    pub fn deltas(&self) -> (f64, f64) {
        self.shared.state.borrow().deltas()
    }

    pub fn config(&self) -> TouchScrollConfig {
        self.shared.config
    }
}

impl<S: FrameScheduler + 'static> Drop for TouchScrollHandler<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn start_delivery<S: FrameScheduler + 'static>(
    shared: &Rc<Shared<S>>,
) -> Result<MoveOutcome, TouchScrollError> {
    let (dx, dy) = shared.state.borrow().deltas();
    let threshold = shared.config.immediate_threshold;
    if dx.abs() < threshold && dy.abs() < threshold {
        shared.state.borrow_mut().clear_deltas();
        trace!(dx, dy, "small gesture delivered raw");
        (shared.on_touch_scroll)(dx, dy);
        return Ok(MoveOutcome::Delivered { x: dx, y: dy });
    }

    let frames = shared.config.frames;
    let run_id = shared.state.borrow_mut().begin_run(frames);
    match request_frame(shared, run_id) {
        Ok(handle) => {
            shared.state.borrow_mut().pending_frame = Some(handle);
            debug!(dx, dy, frames, "easing run started");
            Ok(MoveOutcome::Scheduled { frames })
        }
        Err(e) => {
            shared.state.borrow_mut().abort_run();
            warn!(error = %e, "could not schedule easing run");
            Err(e.into())
        }
    }
}

fn request_frame<S: FrameScheduler + 'static>(
    shared: &Rc<Shared<S>>,
    run_id: u64,
) -> Result<FrameHandle, FrameError> {
    let weak = Rc::downgrade(shared);
    shared.scheduler.schedule(Box::new(move || {
        if let Some(shared) = weak.upgrade() {
            on_frame(&shared, run_id);
        }
    }))
}

fn on_frame<S: FrameScheduler + 'static>(shared: &Rc<Shared<S>>, run_id: u64) {
    let step = shared.state.borrow_mut().step_frame(run_id);
    match step {
        FrameStep::Stale => trace!(run_id, "stale scroll frame dropped"),
        FrameStep::Deliver { x, y } => {
            match request_frame(shared, run_id) {
                Ok(handle) => shared.state.borrow_mut().pending_frame = Some(handle),
                Err(e) => {
                    warn!(error = %e, "frame request failed mid-run, jumping to end");
                    let target = shared.state.borrow_mut().finish_run();
                    if let Some((tx, ty)) = target {
                        (shared.on_touch_scroll)(tx, ty);
                    }
                    return;
                }
            }
            trace!(x, y, "eased scroll frame");
            (shared.on_touch_scroll)(x, y);
        }
        FrameStep::Finished { x, y } => {
            debug!(x, y, "easing run finished");
            (shared.on_touch_scroll)(x, y);
        }
    }
}

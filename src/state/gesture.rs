use crate::frame::FrameHandle;
use crate::input::TouchPoint;

use super::easing::EasingRun;

/// Where the gesture state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A touch is down and a reference point is recorded.
    Tracking,
    /// An easing run is delivering frames.
    Easing(EasingRun),
}

/// Result of feeding one touch-move to the handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The event carried no touch contact.
    NoContact,
    /// Neither axis predicate accepted; the host keeps its native scroll.
    Rejected,
    /// Accepted, but the contact did not move.
    Unchanged,
    /// Small gesture delivered raw and synchronously.
    Delivered { x: f64, y: f64 },
    /// An easing run was started.
    Scheduled { frames: u32 },
    /// A run is already in flight; it keeps its captured trajectory.
    Pending,
}

/// Result of advancing the active run by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// Callback from a run that no longer exists.
    Stale,
    Deliver { x: f64, y: f64 },
    /// Last frame of the run; the state is already back to tracking/idle.
    Finished { x: f64, y: f64 },
}

/// Per-element gesture state. Predicates and the consumer callback live on the handler.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    pub start_x: f64,
    pub start_y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    pub phase: Phase,
    pub pending_frame: Option<FrameHandle>,
    touch_active: bool,
    run_id: u64,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, p: TouchPoint) {
        self.start_x = p.page_x;
        self.start_y = p.page_y;
        self.touch_active = true;
        if !self.is_easing() {
            self.phase = Phase::Tracking;
        }
    }

    pub fn touch_end(&mut self) {
        self.touch_active = false;
        if self.phase == Phase::Tracking {
            self.phase = Phase::Idle;
        }
    }

    /// Inverted displacement from the reference point (natural scrolling).
    pub fn deltas_for(&self, p: TouchPoint) -> (f64, f64) {
        (self.start_x - p.page_x, self.start_y - p.page_y)
    }

    /// Store an accepted move: deltas are replaced, the reference point only
    /// advances on the accepted axes.
    pub fn accept_move(&mut self, p: TouchPoint, delta: (f64, f64), accept_x: bool, accept_y: bool) {
        self.delta_x = delta.0;
        self.delta_y = delta.1;
        if accept_x {
            self.start_x = p.page_x;
        }
        if accept_y {
            self.start_y = p.page_y;
        }
    }

    pub fn deltas(&self) -> (f64, f64) {
        (self.delta_x, self.delta_y)
    }

    pub fn clear_deltas(&mut self) {
        self.delta_x = 0.0;
        self.delta_y = 0.0;
    }

    pub fn is_easing(&self) -> bool {
        matches!(self.phase, Phase::Easing(_))
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Start an easing run from the reference point toward the current deltas.
    /// Returns the id frame callbacks must present to [`GestureState::step_frame`].
    pub fn begin_run(&mut self, frames: u32) -> u64 {
        self.run_id += 1;
        self.phase = Phase::Easing(EasingRun::new(
            (self.start_x, self.start_y),
            (self.delta_x, self.delta_y),
            frames,
        ));
        self.run_id
    }

    pub fn step_frame(&mut self, run_id: u64) -> FrameStep {
        if run_id != self.run_id {
            return FrameStep::Stale;
        }
        let Phase::Easing(run) = &mut self.phase else {
            return FrameStep::Stale;
        };
        // this frame's callback is the one running
        self.pending_frame = None;
        let stepped = run.step();
        let finished = run.is_finished();
        match (stepped, finished) {
            (Some((x, y)), false) => FrameStep::Deliver { x, y },
            (Some((x, y)), true) => {
                self.end_run();
                FrameStep::Finished { x, y }
            }
            (None, _) => {
                self.end_run();
                FrameStep::Stale
            }
        }
    }

    /// Jump the active run to its final position and end it.
    pub fn finish_run(&mut self) -> Option<(f64, f64)> {
        let Phase::Easing(run) = self.phase else {
            return None;
        };
        self.end_run();
        Some(run.target())
    }

    /// Drop a run that never got its first frame. Deltas are kept.
    pub fn abort_run(&mut self) {
        if self.is_easing() {
            self.run_id += 1;
            self.pending_frame = None;
            self.phase = self.resting_phase();
        }
    }

    /// Forget everything in flight. The caller cancels the returned frame.
    pub fn reset(&mut self) -> Option<FrameHandle> {
        self.run_id += 1;
        self.clear_deltas();
        self.touch_active = false;
        self.phase = Phase::Idle;
        self.pending_frame.take()
    }

    fn end_run(&mut self) {
        self.clear_deltas();
        self.pending_frame = None;
        self.phase = self.resting_phase();
    }

    fn resting_phase(&self) -> Phase {
        if self.touch_active { Phase::Tracking } else { Phase::Idle }
    }
}

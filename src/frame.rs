//! Frame scheduling seam.
//!
//! The touch handler never talks to `requestAnimationFrame` directly; it goes
//! through [`FrameScheduler`] so the browser loop can be swapped for a
//! host-driven one ([`ManualScheduler`]) in tests or non-browser hosts.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::FrameError;

/// Ownership token for one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Run `callback` once before the next paint.
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<FrameHandle, FrameError>;

    /// Drop a callback that has not run yet. Unknown or already-run handles are ignored.
    fn cancel(&self, handle: FrameHandle);
}

/// `window.requestAnimationFrame` backed scheduler.
#[derive(Debug, Clone)]
pub struct RafScheduler {
    window: web_sys::Window,
}

impl RafScheduler {
    pub fn new() -> Result<Self, FrameError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(FrameError::NoWindow)
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<FrameHandle, FrameError> {
        // frees itself after the single invocation; a cancelled frame leaks its closure
        let js = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(js.unchecked_ref::<js_sys::Function>())
            .map(FrameHandle)
            .map_err(|e| FrameError::Request(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }

    fn cancel(&self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

#[derive(Default)]
struct ManualQueue {
    next_id: i32,
    queued: Vec<(FrameHandle, Box<dyn FnOnce()>)>,
    scheduled_total: usize,
    failing: bool,
}

/// Scheduler whose frames only advance when the host calls [`ManualScheduler::run_frame`].
/// Clones share one queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every callback queued before this call. Callbacks scheduled while
    /// the frame runs wait for the next one. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let ids: Vec<FrameHandle> = self.inner.borrow().queued.iter().map(|(h, _)| *h).collect();
        let mut ran = 0;
        for id in ids {
            // re-check each id: an earlier callback may have cancelled it
            let callback = {
                let mut q = self.inner.borrow_mut();
                q.queued
                    .iter()
                    .position(|(h, _)| *h == id)
                    .map(|i| q.queued.remove(i).1)
            };
            if let Some(callback) = callback {
                callback();
                ran += 1;
            }
        }
        ran
    }

    /// Runs frames until nothing is queued or `max_frames` frames have run.
    /// Returns the number of frames that ran at least one callback.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.pending() > 0 {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    /// Callbacks currently waiting for a frame.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queued.len()
    }

    /// Total successful `schedule` calls over the scheduler's lifetime.
    pub fn scheduled_total(&self) -> usize {
        self.inner.borrow().scheduled_total
    }

    /// While set, every `schedule` call fails with [`FrameError::Request`].
    pub fn set_failing(&self, failing: bool) {
        self.inner.borrow_mut().failing = failing;
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce()>) -> Result<FrameHandle, FrameError> {
        let mut q = self.inner.borrow_mut();
        if q.failing {
            return Err(FrameError::Request("scheduler refused frame".into()));
        }
        q.next_id += 1;
        let handle = FrameHandle(q.next_id);
        q.queued.push((handle, callback));
        q.scheduled_total += 1;
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        self.inner.borrow_mut().queued.retain(|(h, _)| *h != handle);
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("pending", &q.queued.len())
            .field("scheduled_total", &q.scheduled_total)
            .finish()
    }
}

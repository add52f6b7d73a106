//! Touch-to-scroll translation for Yew front-ends.
//!
//! [`TouchScrollHandler`] turns touch-start/touch-move events into scroll
//! callbacks: small moves are delivered raw, larger ones are eased over a
//! fixed number of animation frames.

pub mod components;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod model;
pub mod state;
pub mod util;

pub use config::TouchScrollConfig;
pub use error::{ConfigError, FrameError, TouchScrollError};
pub use frame::{FrameHandle, FrameScheduler, ManualScheduler, RafScheduler};
pub use input::{TouchInput, TouchPoint};
pub use state::{AxisPredicate, MoveOutcome, Phase, PropagationPredicate, TouchScrollHandler};

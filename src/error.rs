//! Error types for touch scrolling.

use thiserror::Error;

/// Failures of the frame scheduler collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// No `window` global (not running in a browser main thread)
    #[error("no window available to schedule animation frames")]
    NoWindow,

    /// `requestAnimationFrame` threw
    #[error("requestAnimationFrame failed: {0}")]
    Request(String),
}

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("immediate threshold must be a finite, non-negative pixel count (got {0})")]
    InvalidThreshold(f64),

    #[error("an easing run needs at least one frame")]
    ZeroFrames,
}

/// Errors surfaced by the touch handler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TouchScrollError {
    #[error(transparent)]
    Frame(#[from] FrameError),
}

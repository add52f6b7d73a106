pub mod easing;
pub mod gesture;
pub mod predicate;
pub mod touch;

pub use easing::{EasingRun, ease_in_out_quad};
pub use gesture::{FrameStep, GestureState, MoveOutcome, Phase};
pub use predicate::{AxisPredicate, PropagationPredicate};
pub use touch::TouchScrollHandler;

//! Value animations.
//!
//! - `easing`: Progress curves (linear, spline, sine)
//! - `transition`: Single tweens and the rise-then-return sequence
//! - `engine`: One active animation per gauge, advanced by `tick`
//!
//! **FPS Independence**: every animation advances by the elapsed time the host
//! passes in, never by frame count, so speed does not depend on frame rate.

pub mod easing;
pub mod engine;
pub mod transition;

pub use easing::Easing;
pub use engine::{AnimationEngine, TickReport};
pub use transition::{SequencePhase, SequenceStep, Transition, TransitionSequence, TransitionState};

//! Motion history and flick velocity
//!
//! Pointer deltas along the active scroll axis are kept in a short
//! time-windowed history; the velocity estimator averages over it.

mod buffer;
mod velocity;

pub use buffer::{MotionSample, MotionSampleBuffer};
pub use velocity::VelocityEstimator;

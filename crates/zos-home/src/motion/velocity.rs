//! Flick velocity from the motion history

use super::MotionSampleBuffer;

/// Averages retained motion into a signed scroll velocity (px/s)
///
/// Magnitude is total travelled distance over total time, so jitter inside
/// the window still counts as speed. The sign comes from the gesture's
/// cumulative offset rather than the samples, so a short reversal at the end
/// of a flick does not flip its direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityEstimator;

impl VelocityEstimator {
    /// Estimate velocity in px/s. Returns 0 for an empty or zero-duration history.
    pub fn estimate(buffer: &MotionSampleBuffer, cumulative_offset: f32) -> f32 {
        let (distance, elapsed_ms) = buffer
            .iter()
            .fold((0.0f32, 0.0f64), |(d, t), s| (d + s.delta.abs(), t + s.dt));

        if elapsed_ms <= 0.0 {
            return 0.0;
        }

        let speed = (distance as f64 / (elapsed_ms / 1000.0)) as f32;
        if cumulative_offset < 0.0 {
            -speed
        } else {
            speed
        }
    }
}

//! Easing for page transitions

/// Ease-out cubic: fast start, gentle settle
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

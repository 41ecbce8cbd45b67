//! Page transition in flight after a release

use serde::Serialize;
use super::easing::ease_out_cubic;

/// What a transition does to the current page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Committed to the following view
    Next,
    /// Committed to the preceding view
    Previous,
    /// Snapping back to the current view
    Back,
}

/// Animated return of the live offset to zero
///
/// Owned by the pagination model. The clock starts on the first tick so
/// the transition can be created from the release path without a timestamp.
#[derive(Clone, Debug)]
pub struct PendingTransition {
    pub kind: TransitionKind,
    /// View shown before the transition
    pub from_index: usize,
    /// View shown when the transition settles
    pub to_index: usize,
    /// Live offset relative to `to_index` when the transition began
    pub start_offset: f32,
    /// Release velocity (px/s)
    pub velocity: f32,
    pub duration_ms: f64,
    start_ms: Option<f64>,
}

impl PendingTransition {
    pub(crate) fn new(
        kind: TransitionKind,
        from_index: usize,
        to_index: usize,
        start_offset: f32,
        velocity: f32,
        duration_ms: f64,
    ) -> Self {
        Self {
            kind,
            from_index,
            to_index,
            start_offset,
            velocity,
            duration_ms,
            start_ms: None,
        }
    }

    /// Duration for covering `distance` at `velocity`, clamped to `[min_ms, max_ms]`.
    /// A stationary release takes the slowest transition.
    pub fn duration_for(distance: f32, velocity: f32, min_ms: f64, max_ms: f64) -> f64 {
        let speed = velocity.abs() as f64;
        if speed <= f64::EPSILON {
            return max_ms;
        }
        (distance.abs() as f64 / speed * 1000.0).clamp(min_ms, max_ms)
    }

    /// Progress (0.0 to 1.0); 0 until the first tick
    pub fn progress(&self, now_ms: f64) -> f32 {
        let start = match self.start_ms {
            Some(start) => start,
            None => return 0.0,
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - start) / self.duration_ms) as f32).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Live offset at `now_ms`
    pub fn offset_at(&self, now_ms: f64) -> f32 {
        self.start_offset * (1.0 - ease_out_cubic(self.progress(now_ms)))
    }

    /// Start the clock if it has not started yet
    pub(crate) fn start(&mut self, now_ms: f64) {
        self.start_ms.get_or_insert(now_ms);
    }

    pub(crate) fn finish(self, interrupted: bool) -> CompletedTransition {
        CompletedTransition {
            kind: self.kind,
            index: self.to_index,
            interrupted,
        }
    }
}

/// Completion notice for a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompletedTransition {
    pub kind: TransitionKind,
    /// View on screen after the transition
    pub index: usize,
    /// True when a new gesture cut the animation short
    pub interrupted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_velocity() {
        // 580px at 2000px/s = 290ms
        let d = PendingTransition::duration_for(580.0, -2000.0, 150.0, 500.0);
        assert!((d - 290.0).abs() < 0.01);
    }

    #[test]
    fn test_duration_clamped() {
        assert!((PendingTransition::duration_for(10.0, 5000.0, 150.0, 500.0) - 150.0).abs() < 0.01);
        assert!((PendingTransition::duration_for(800.0, 100.0, 150.0, 500.0) - 500.0).abs() < 0.01);
        assert!((PendingTransition::duration_for(800.0, 0.0, 150.0, 500.0) - 500.0).abs() < 0.01);
    }

    #[test]
    fn test_offset_before_first_tick() {
        let transition = PendingTransition::new(TransitionKind::Back, 0, 0, 120.0, 0.0, 300.0);
        assert!((transition.offset_at(1_000.0) - 120.0).abs() < 0.001);
        assert!(!transition.is_complete(1_000.0));
    }

    #[test]
    fn test_offset_settles_to_zero() {
        let mut transition = PendingTransition::new(TransitionKind::Next, 0, 1, 580.0, -2000.0, 300.0);
        transition.start(100.0);

        let mid = transition.offset_at(250.0);
        assert!(mid > 0.0 && mid < 580.0);
        assert!((transition.offset_at(400.0) - 0.0).abs() < 0.001);
        assert!(transition.is_complete(400.0));
    }

    #[test]
    fn test_start_is_sticky() {
        let mut transition = PendingTransition::new(TransitionKind::Back, 0, 0, 50.0, 0.0, 100.0);
        transition.start(0.0);
        transition.start(90.0);
        assert!(transition.is_complete(100.0));
    }
}

//! Time-windowed history of pointer deltas

use std::collections::VecDeque;

/// One pointer movement along the active axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Signed displacement since the previous sample (px)
    pub delta: f32,
    /// Time elapsed since the previous sample (ms)
    pub dt: f64,
}

/// Newest-first motion history bounded by a time window
///
/// After every [`record`](Self::record) the buffer holds every sample whose
/// age is within the window plus exactly one older anchor sample, if one
/// exists. The last remaining sample is never pruned.
#[derive(Clone, Debug)]
pub struct MotionSampleBuffer {
    samples: VecDeque<MotionSample>,
    window_ms: f64,
    /// Sum of `dt` over retained samples
    total_dt: f64,
}

impl MotionSampleBuffer {
    /// Create an empty buffer with the given window
    pub fn new(window_ms: f64) -> Self {
        Self {
            samples: VecDeque::new(),
            window_ms,
            total_dt: 0.0,
        }
    }

    /// Record a new sample and prune samples that fell out of the window
    pub fn record(&mut self, delta: f32, dt: f64) {
        let dt = dt.max(0.0);
        self.samples.push_front(MotionSample { delta, dt });
        self.total_dt += dt;

        // The age of a sample is the time covered by the samples newer than it.
        // Drop the oldest while the one before it is already outside the window,
        // so exactly one out-of-window anchor survives.
        while self.samples.len() > 1 {
            let len = self.samples.len();
            let oldest = self.samples[len - 1].dt;
            let second_oldest = self.samples[len - 2].dt;
            let second_oldest_age = self.total_dt - oldest - second_oldest;
            if second_oldest_age <= self.window_ms {
                break;
            }
            self.samples.pop_back();
            self.total_dt -= oldest;
        }
    }

    /// Drop every sample
    pub fn clear(&mut self) {
        self.samples.clear();
        self.total_dt = 0.0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time covered by retained samples (ms)
    #[inline]
    pub fn total_dt(&self) -> f64 {
        self.total_dt
    }

    /// Configured window (ms)
    #[inline]
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Samples, newest first
    pub fn iter(&self) -> impl Iterator<Item = &MotionSample> {
        self.samples.iter()
    }
}

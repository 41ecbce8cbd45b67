//! Cancellable long-press timer

use serde::Serialize;
use super::SessionId;

/// Handle to an armed long-press timer, bound to the session that armed it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TimerHandle(pub(crate) SessionId);

impl TimerHandle {
    /// Session this timer belongs to
    #[inline]
    pub fn session(self) -> SessionId {
        self.0
    }
}

/// Deadline for the long-press of the current session
///
/// A handle can fire at most once: firing or cancelling disarms the timer,
/// and a handle from an earlier session never matches a later one.
#[derive(Clone, Debug, Default)]
pub struct LongPressTimer {
    armed: Option<(TimerHandle, f64)>,
}

impl LongPressTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for `session`, replacing any earlier deadline
    pub fn arm(&mut self, session: SessionId, deadline_ms: f64) -> TimerHandle {
        let handle = TimerHandle(session);
        self.armed = Some((handle, deadline_ms));
        handle
    }

    /// Disarm. Returns false if nothing was armed.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Armed handle and its deadline
    #[inline]
    pub fn deadline(&self) -> Option<(TimerHandle, f64)> {
        self.armed
    }

    /// Handle whose deadline has passed at `now_ms`
    pub fn due(&self, now_ms: f64) -> Option<TimerHandle> {
        self.armed
            .filter(|&(_, deadline)| now_ms >= deadline)
            .map(|(handle, _)| handle)
    }

    /// Disarm if `handle` is the armed one; true means the caller may fire it
    pub fn consume(&mut self, handle: TimerHandle) -> bool {
        match self.armed {
            Some((armed, _)) if armed == handle => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}

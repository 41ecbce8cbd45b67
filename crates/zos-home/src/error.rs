//! Error types for the home screen engine

use thiserror::Error;
use crate::forward::WindowHandle;

/// Failure to deliver a synthetic event through the window system
///
/// Forwarding is best effort: the gesture controller logs these and keeps
/// resolving the gesture from its own state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// Target window no longer exists
    #[error("window {0:#x} is gone")]
    WindowGone(WindowHandle),

    /// Child window chain did not terminate
    #[error("window nesting deeper than {depth} levels below {root:#x}")]
    NestingTooDeep { root: WindowHandle, depth: usize },

    /// The window system refused the event
    #[error("send to window {window:#x} failed: {reason}")]
    SendFailed { window: WindowHandle, reason: String },
}

/// Invalid gesture configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text could not be decoded
    #[error("invalid gesture config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field is out of its accepted range
    #[error("gesture config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Invalid view or widget placement
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The container needs at least one view
    #[error("pagination model needs at least one view")]
    NoViews,

    /// View index outside [0, N)
    #[error("view index {index} out of range (have {count})")]
    OutOfRange { index: usize, count: usize },

    /// A view already designates a live background
    #[error("view {0} already has a live background")]
    LiveBackgroundTaken(usize),

    /// The view currently on screen cannot be deactivated
    #[error("view {0} is current and cannot be deactivated")]
    CurrentViewInactive(usize),

    /// Orientation cannot change while a pointer session is active
    #[error("orientation change while a gesture is in progress")]
    GestureInProgress,
}

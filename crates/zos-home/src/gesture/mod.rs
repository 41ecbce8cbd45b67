//! Gesture recognition
//!
//! Turns raw press/motion/release events into page panning, widget taps
//! and edit-mode requests.

mod controller;
mod request;
mod session;
mod timer;

pub use controller::GestureController;
pub use request::ShellRequest;
pub use session::{PointerSession, PressedWidget, SessionId};
pub use timer::{LongPressTimer, TimerHandle};

use serde::Serialize;

/// Observable state of the gesture controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    /// No pointer session
    Idle,
    /// Pressed on bare desktop (or a cancelled widget tap), not yet panning
    Pressed,
    /// Pressed on a widget, tap still possible
    PendingClick,
    /// Moved past the pan threshold; pages follow the pointer
    Panning,
}

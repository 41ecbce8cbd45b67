//! The single active pointer gesture

use crate::forward::WindowHandle;
use crate::math::{Point, Rect};
use crate::widget::WidgetId;

/// Unique pointer session identifier
pub type SessionId = u64;

/// Widget that received the press
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressedWidget {
    pub id: WidgetId,
    pub window: WindowHandle,
    /// Widget frame at press time
    pub rect: Rect,
    /// Focus will be assigned on release instead of delivering a click
    pub pending_focus: bool,
}

/// State of one press-to-release gesture
///
/// Created on press and dropped on release or cancel. `cumulative` tracks
/// displacement along the active scroll axis only.
#[derive(Clone, Debug)]
pub struct PointerSession {
    pub id: SessionId,
    pub origin: Point,
    pub last: Point,
    /// Host time of the last press/motion (ms)
    pub last_ms: f64,
    pub cumulative: f32,
    pub over_threshold: bool,
    pub long_press: bool,
    pub pressed: Option<PressedWidget>,
}

impl PointerSession {
    pub fn new(id: SessionId, origin: Point, now_ms: f64, pressed: Option<PressedWidget>) -> Self {
        Self {
            id,
            origin,
            last: origin,
            last_ms: now_ms,
            cumulative: 0.0,
            over_threshold: false,
            long_press: false,
            pressed,
        }
    }
}

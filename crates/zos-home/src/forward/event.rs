//! Synthetic pointer events and window translation results

use serde::Serialize;
use crate::math::Point;
use super::WindowHandle;

/// Kind of synthetic pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntheticKind {
    Press,
    Motion,
    Release,
    Enter,
    Leave,
}

/// A pointer event synthesized for a specific window
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SyntheticEvent {
    pub kind: SyntheticKind,
    /// Innermost window the event is delivered to
    pub window: WindowHandle,
    /// Position in `window`'s coordinates
    pub local: Point,
    /// Position in root (desktop) coordinates
    pub root: Point,
}

/// Result of translating a root point into a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translation {
    /// The point in the window's coordinates
    pub local: Point,
    /// Child window containing the point
    pub child: Option<WindowHandle>,
}

/// Target of an input focus change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FocusTarget {
    /// The desktop window; unfocuses every widget
    Desktop,
    /// A widget's window
    Window { window: WindowHandle },
}

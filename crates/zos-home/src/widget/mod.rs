//! Widgets hosted on home views
//!
//! A widget's participation in gestures is fixed by its [`WidgetKind`],
//! resolved once when the widget is registered.

use serde::{Deserialize, Serialize};
use crate::forward::WindowHandle;
use crate::math::{Point, Rect};

/// Unique widget identifier
pub type WidgetId = u64;

/// How a widget takes part in pointer handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Interactive applet: hit-tested, may take focus, receives taps
    Applet,
    /// Scrollable wallpaper receiving pass-through pointer events
    LiveBackground,
    /// Decoration that never takes part in gestures
    Other,
}

/// A rectangular widget with its own underlying window
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
    /// Frame in desktop coordinates
    pub rect: Rect,
    /// Whether the widget wants input focus on tap
    pub wants_focus: bool,
    /// Underlying window for event forwarding
    pub window: WindowHandle,
}

impl Widget {
    /// Create an applet widget
    pub fn applet(id: WidgetId, rect: Rect, window: WindowHandle) -> Self {
        Self {
            id,
            kind: WidgetKind::Applet,
            rect,
            wants_focus: false,
            window,
        }
    }

    /// Create a live background widget covering `rect`
    pub fn live_background(id: WidgetId, rect: Rect, window: WindowHandle) -> Self {
        Self {
            id,
            kind: WidgetKind::LiveBackground,
            rect,
            wants_focus: false,
            window,
        }
    }

    /// Builder-style setter for the focus preference
    pub fn with_focus(mut self, wants_focus: bool) -> Self {
        self.wants_focus = wants_focus;
        self
    }

    /// True if a press at `point` lands on this widget as a tap target
    #[inline]
    pub fn hit(&self, point: Point) -> bool {
        self.kind == WidgetKind::Applet && self.rect.contains(point)
    }
}

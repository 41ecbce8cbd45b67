//! Requests from the gesture controller to the shell

use serde::Serialize;
use crate::view::TransitionKind;
use crate::widget::WidgetId;

/// High-level decision for the surrounding shell to act on
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellRequest {
    /// Enter the widget rearrange mode
    EnterEditMode,
    /// A drag crossed the pan threshold; show the page-edge indicators
    ShowEdgeIndicators { previous: bool, next: bool },
    /// The drag ended; hide the page-edge indicators
    HideEdgeIndicators,
    /// A tap was delivered to a widget
    WidgetClicked { widget: WidgetId },
    /// Input focus was assigned to a widget instead of a tap
    WidgetFocused { widget: WidgetId },
    /// The pan was resolved into a page transition
    PageTransition { kind: TransitionKind, index: usize, velocity: f32 },
    /// A page transition settled or was cut short by a new press
    TransitionCompleted { kind: TransitionKind, index: usize, interrupted: bool },
}

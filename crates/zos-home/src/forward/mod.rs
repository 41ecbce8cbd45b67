//! Synthetic event forwarding to widget windows
//!
//! The window system does not route synthetic events through nested
//! windows, so the forwarder descends to the innermost window under the
//! pointer itself before sending.

mod event;
mod forwarder;
mod headless;

pub use event::{FocusTarget, SyntheticEvent, SyntheticKind, Translation};
pub use forwarder::{EventForwarder, MAX_NESTING_DEPTH};
pub use headless::HeadlessWindowSystem;

use crate::error::ForwardError;
use crate::math::Point;

/// Native window handle
pub type WindowHandle = u64;

/// Window system services consumed by the home screen
pub trait WindowSystem {
    /// Translate a root-relative point into `window`'s coordinates, also
    /// reporting the child of `window` that contains the point, if any
    fn translate(&self, window: WindowHandle, root: Point) -> Result<Translation, ForwardError>;

    /// Deliver a synthetic event. Fire and forget: no acknowledgement.
    fn send(&mut self, event: &SyntheticEvent) -> Result<(), ForwardError>;

    /// True if `window` or one of its children holds input focus
    fn holds_focus(&self, window: WindowHandle) -> bool;

    /// Move input focus
    fn focus(&mut self, target: FocusTarget);
}

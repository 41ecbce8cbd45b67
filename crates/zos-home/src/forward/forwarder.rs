//! Event forwarder resolving nested windows

use tracing::trace;
use crate::error::ForwardError;
use crate::math::Point;
use super::{FocusTarget, SyntheticEvent, SyntheticKind, WindowHandle, WindowSystem};

/// Deepest window nesting followed before giving up
pub const MAX_NESTING_DEPTH: usize = 32;

/// Synthesizes pointer and focus events toward widget windows
pub struct EventForwarder<W: WindowSystem> {
    windows: W,
}

impl<W: WindowSystem> EventForwarder<W> {
    /// Create a forwarder over a window system
    pub fn new(windows: W) -> Self {
        Self { windows }
    }

    #[inline]
    pub fn window_system(&self) -> &W {
        &self.windows
    }

    #[inline]
    pub fn window_system_mut(&mut self) -> &mut W {
        &mut self.windows
    }

    /// Innermost window under `root`, starting at `target`, with the
    /// point in that window's coordinates
    pub fn resolve(&self, target: WindowHandle, root: Point) -> Result<(WindowHandle, Point), ForwardError> {
        let mut window = target;
        for _ in 0..MAX_NESTING_DEPTH {
            let translation = self.windows.translate(window, root)?;
            match translation.child {
                Some(child) => window = child,
                None => return Ok((window, translation.local)),
            }
        }
        Err(ForwardError::NestingTooDeep {
            root: target,
            depth: MAX_NESTING_DEPTH,
        })
    }

    fn emit(&mut self, kind: SyntheticKind, target: WindowHandle, root: Point) -> Result<(), ForwardError> {
        let (window, local) = self.resolve(target, root)?;
        let event = SyntheticEvent { kind, window, local, root };
        trace!(?event, "forward");
        self.windows.send(&event)
    }

    pub fn press(&mut self, target: WindowHandle, root: Point) -> Result<(), ForwardError> {
        self.emit(SyntheticKind::Press, target, root)
    }

    pub fn motion(&mut self, target: WindowHandle, root: Point) -> Result<(), ForwardError> {
        self.emit(SyntheticKind::Motion, target, root)
    }

    pub fn release(&mut self, target: WindowHandle, root: Point) -> Result<(), ForwardError> {
        self.emit(SyntheticKind::Release, target, root)
    }

    /// Pointer entered the widget; drives its pressed-state feedback
    pub fn enter(&mut self, target: WindowHandle, root: Point) -> Result<(), ForwardError> {
        self.emit(SyntheticKind::Enter, target, root)
    }

    /// Cancel an interaction. Delivered to the window under `root` but
    /// positioned off screen, so it never reads as a hit.
    pub fn leave(&mut self, target: WindowHandle, root: Point) -> Result<(), ForwardError> {
        let (window, _) = self.resolve(target, root)?;
        let event = SyntheticEvent {
            kind: SyntheticKind::Leave,
            window,
            local: Point::OFF_SCREEN,
            root: Point::OFF_SCREEN,
        };
        trace!(?event, "forward");
        self.windows.send(&event)
    }

    /// True if `window` or one of its children holds input focus
    #[inline]
    pub fn holds_focus(&self, window: WindowHandle) -> bool {
        self.windows.holds_focus(window)
    }

    /// Give focus to the desktop, unfocusing any widget
    #[inline]
    pub fn focus_desktop(&mut self) {
        self.windows.focus(FocusTarget::Desktop);
    }

    /// Give focus to a widget window
    #[inline]
    pub fn focus_window(&mut self, window: WindowHandle) {
        self.windows.focus(FocusTarget::Window { window });
    }
}

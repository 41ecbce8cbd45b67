//! In-memory window system for headless hosts and tests

use std::collections::HashMap;
use crate::error::ForwardError;
use crate::math::{Point, Rect};
use super::{FocusTarget, SyntheticEvent, Translation, WindowHandle, WindowSystem, MAX_NESTING_DEPTH};

#[derive(Clone, Debug)]
struct HeadlessWindow {
    /// Frame in root coordinates
    frame: Rect,
    parent: Option<WindowHandle>,
    /// Children in stacking order (last is topmost)
    children: Vec<WindowHandle>,
}

/// Window tree kept in memory, recording every event sent to it
#[derive(Clone, Debug, Default)]
pub struct HeadlessWindowSystem {
    windows: HashMap<WindowHandle, HeadlessWindow>,
    focused: Option<WindowHandle>,
    sent: Vec<SyntheticEvent>,
    focus_requests: Vec<FocusTarget>,
}

impl HeadlessWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level window with a frame in root coordinates
    pub fn add_window(&mut self, handle: WindowHandle, frame: Rect) {
        self.insert(handle, frame, None);
    }

    /// Add a window nested inside `parent`, frame in root coordinates
    pub fn add_child(&mut self, parent: WindowHandle, handle: WindowHandle, frame: Rect) -> Result<(), ForwardError> {
        if !self.windows.contains_key(&parent) {
            return Err(ForwardError::WindowGone(parent));
        }
        self.insert(handle, frame, Some(parent));
        if let Some(p) = self.windows.get_mut(&parent) {
            if !p.children.contains(&handle) {
                p.children.push(handle);
            }
        }
        Ok(())
    }

    fn insert(&mut self, handle: WindowHandle, frame: Rect, parent: Option<WindowHandle>) {
        let window = self.windows.entry(handle).or_insert_with(|| HeadlessWindow {
            frame,
            parent,
            children: Vec::new(),
        });
        window.frame = frame;
        window.parent = parent;
    }

    /// Destroy a window and unlink it from its parent
    pub fn remove_window(&mut self, handle: WindowHandle) {
        if let Some(window) = self.windows.remove(&handle) {
            if let Some(parent) = window.parent.and_then(|p| self.windows.get_mut(&p)) {
                parent.children.retain(|&c| c != handle);
            }
        }
        if self.focused == Some(handle) {
            self.focused = None;
        }
    }

    /// Events delivered so far
    #[inline]
    pub fn sent(&self) -> &[SyntheticEvent] {
        &self.sent
    }

    /// Drain delivered events
    pub fn take_sent(&mut self) -> Vec<SyntheticEvent> {
        std::mem::take(&mut self.sent)
    }

    /// Focus changes requested so far
    #[inline]
    pub fn focus_requests(&self) -> &[FocusTarget] {
        &self.focus_requests
    }

    /// Window holding input focus; `None` means the desktop
    #[inline]
    pub fn focused(&self) -> Option<WindowHandle> {
        self.focused
    }
}

impl WindowSystem for HeadlessWindowSystem {
    fn translate(&self, window: WindowHandle, root: Point) -> Result<Translation, ForwardError> {
        let w = self.windows.get(&window).ok_or(ForwardError::WindowGone(window))?;
        let child = w
            .children
            .iter()
            .rev()
            .copied()
            .find(|c| self.windows.get(c).is_some_and(|cw| cw.frame.contains(root)));
        Ok(Translation {
            local: Point::new(root.x - w.frame.x, root.y - w.frame.y),
            child,
        })
    }

    fn send(&mut self, event: &SyntheticEvent) -> Result<(), ForwardError> {
        if !self.windows.contains_key(&event.window) {
            return Err(ForwardError::WindowGone(event.window));
        }
        self.sent.push(*event);
        Ok(())
    }

    fn holds_focus(&self, window: WindowHandle) -> bool {
        let mut current = self.focused;
        for _ in 0..MAX_NESTING_DEPTH {
            match current {
                Some(w) if w == window => return true,
                Some(w) => current = self.windows.get(&w).and_then(|hw| hw.parent),
                None => return false,
            }
        }
        false
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = match target {
            FocusTarget::Desktop => None,
            FocusTarget::Window { window } => Some(window),
        };
        self.focus_requests.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_focus_counts_for_parent() {
        let mut ws = HeadlessWindowSystem::new();
        ws.add_window(0x10, Rect::new(0.0, 0.0, 100.0, 100.0));
        ws.add_child(0x10, 0x11, Rect::new(10.0, 10.0, 20.0, 20.0)).unwrap();

        ws.focus(FocusTarget::Window { window: 0x11 });
        assert!(ws.holds_focus(0x10));
        assert!(ws.holds_focus(0x11));

        ws.focus(FocusTarget::Desktop);
        assert!(!ws.holds_focus(0x10));
        assert_eq!(ws.focus_requests().len(), 2);
    }

    #[test]
    fn test_add_child_requires_parent() {
        let mut ws = HeadlessWindowSystem::new();
        assert_eq!(
            ws.add_child(0x1, 0x2, Rect::default()),
            Err(ForwardError::WindowGone(0x1))
        );
    }

    #[test]
    fn test_remove_window_unlinks() {
        let mut ws = HeadlessWindowSystem::new();
        ws.add_window(0x10, Rect::new(0.0, 0.0, 100.0, 100.0));
        ws.add_child(0x10, 0x11, Rect::new(0.0, 0.0, 50.0, 50.0)).unwrap();
        ws.remove_window(0x11);

        let t = ws.translate(0x10, Point::new(5.0, 5.0)).unwrap();
        assert!(t.child.is_none());
    }
}

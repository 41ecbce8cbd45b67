//! A single home view (page) and its widgets

use crate::error::ViewError;
use crate::math::Point;
use crate::widget::{Widget, WidgetId, WidgetKind};

/// One addressable page of widgets
#[derive(Clone, Debug)]
pub struct View {
    /// Position in the pagination order
    pub index: usize,
    /// Widgets in stacking order (last is topmost)
    widgets: Vec<Widget>,
    /// Inactive views are skipped when paging
    active: bool,
}

impl View {
    /// Create an empty, active view
    pub fn new(index: usize) -> Self {
        Self {
            index,
            widgets: Vec::new(),
            active: true,
        }
    }

    /// Add a widget on top of the view
    ///
    /// A view holds at most one live background.
    pub fn add_widget(&mut self, widget: Widget) -> Result<(), ViewError> {
        if widget.kind == WidgetKind::LiveBackground && self.live_background().is_some_and(|bg| bg.id != widget.id) {
            return Err(ViewError::LiveBackgroundTaken(self.index));
        }
        self.widgets.retain(|w| w.id != widget.id);
        self.widgets.push(widget);
        Ok(())
    }

    /// Remove a widget, returning it if present
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Widget> {
        let pos = self.widgets.iter().position(|w| w.id == id)?;
        Some(self.widgets.remove(pos))
    }

    #[inline]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Topmost applet under `point`
    pub fn widget_at(&self, point: Point) -> Option<&Widget> {
        self.widgets.iter().rev().find(|w| w.hit(point))
    }

    /// The view's live background, if one is designated
    pub fn live_background(&self) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.kind == WidgetKind::LiveBackground)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

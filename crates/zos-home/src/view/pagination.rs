//! Ordered views with a current index and a live drag offset

use serde::Serialize;
use tracing::debug;
use crate::config::{GestureConfig, TRANSITION_MAX_MS, TRANSITION_MIN_MS};
use crate::error::ViewError;
use crate::math::{Orientation, Point};
use crate::widget::{Widget, WidgetKind};
use super::{CompletedTransition, PendingTransition, TransitionKind, View};

/// Visibility of the page-edge indicators
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EdgeIndicators {
    /// A preceding view exists
    pub previous: bool,
    /// A following view exists
    pub next: bool,
}

/// Paginated container of home views
///
/// The current index only changes through `scroll_to_next` and
/// `scroll_to_previous`. The live offset is advisory for rendering and is
/// unbounded while a drag is in progress.
#[derive(Clone, Debug)]
pub struct ViewPaginationModel {
    views: Vec<View>,
    current: usize,
    live_offset: f32,
    orientation: Orientation,
    /// Page size along the scroll axis (px)
    page_extent: f32,
    /// Wallpaper shared by every view; overrides per-view live backgrounds
    shared_live_background: Option<Widget>,
    transition: Option<PendingTransition>,
    transition_min_ms: f64,
    transition_max_ms: f64,
}

impl ViewPaginationModel {
    /// Create `view_count` empty views, starting at index 0
    pub fn new(view_count: usize, orientation: Orientation, page_extent: f32) -> Result<Self, ViewError> {
        if view_count == 0 {
            return Err(ViewError::NoViews);
        }
        Ok(Self {
            views: (0..view_count).map(View::new).collect(),
            current: 0,
            live_offset: 0.0,
            orientation,
            page_extent,
            shared_live_background: None,
            transition: None,
            transition_min_ms: TRANSITION_MIN_MS,
            transition_max_ms: TRANSITION_MAX_MS,
        })
    }

    /// Create a model from gesture configuration
    pub fn from_config(config: &GestureConfig) -> Result<Self, ViewError> {
        let mut model = Self::new(config.view_count, config.orientation, config.page_extent)?;
        model.transition_min_ms = config.transition_min_ms;
        model.transition_max_ms = config.transition_max_ms;
        Ok(model)
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[inline]
    pub fn views(&self) -> &[View] {
        &self.views
    }

    #[inline]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn view(&self, index: usize) -> Option<&View> {
        self.views.get(index)
    }

    pub fn view_mut(&mut self, index: usize) -> Option<&mut View> {
        self.views.get_mut(index)
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current_view(&self) -> &View {
        &self.views[self.current]
    }

    /// Place a widget on a view
    pub fn add_widget(&mut self, index: usize, widget: Widget) -> Result<(), ViewError> {
        let count = self.views.len();
        self.views
            .get_mut(index)
            .ok_or(ViewError::OutOfRange { index, count })?
            .add_widget(widget)
    }

    /// Activate or deactivate a view; inactive views are skipped when paging
    pub fn set_view_active(&mut self, index: usize, active: bool) -> Result<(), ViewError> {
        let count = self.views.len();
        if index >= count {
            return Err(ViewError::OutOfRange { index, count });
        }
        if !active && index == self.current {
            return Err(ViewError::CurrentViewInactive(index));
        }
        self.views[index].set_active(active);
        Ok(())
    }

    /// Topmost applet under `point` on the current view
    pub fn widget_at(&self, point: Point) -> Option<&Widget> {
        self.current_view().widget_at(point)
    }

    /// Set or clear the wallpaper shared by all views
    pub fn set_shared_live_background(&mut self, widget: Option<Widget>) {
        self.shared_live_background = widget.filter(|w| w.kind == WidgetKind::LiveBackground);
    }

    /// Live background receiving pass-through events on the current view
    pub fn live_background(&self) -> Option<&Widget> {
        self.shared_live_background
            .as_ref()
            .or_else(|| self.current_view().live_background())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    #[inline]
    pub fn page_extent(&self) -> f32 {
        self.page_extent
    }

    #[inline]
    pub fn set_page_extent(&mut self, page_extent: f32) {
        self.page_extent = page_extent;
    }

    #[inline]
    pub fn live_offset(&self) -> f32 {
        self.live_offset
    }

    /// Record a provisional display offset; never changes the current index
    #[inline]
    pub fn set_live_offset(&mut self, pixels: f32) {
        self.live_offset = pixels;
    }

    // =========================================================================
    // Neighbours
    // =========================================================================

    /// Nearest active view after the current one
    pub fn next_index(&self) -> Option<usize> {
        (self.current + 1..self.views.len()).find(|&i| self.views[i].is_active())
    }

    /// Nearest active view before the current one
    pub fn previous_index(&self) -> Option<usize> {
        (0..self.current).rev().find(|&i| self.views[i].is_active())
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.next_index().is_some()
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.previous_index().is_some()
    }

    /// Which page-edge indicators should be shown
    pub fn edge_indicators(&self) -> EdgeIndicators {
        EdgeIndicators {
            previous: self.has_previous(),
            next: self.has_next(),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Commit to the following view, or snap back at the last one
    pub fn scroll_to_next(&mut self, velocity: f32) {
        self.settle_transition();
        match self.next_index() {
            Some(next) => self.commit(TransitionKind::Next, next, self.live_offset + self.page_extent, velocity),
            None => self.scroll_back(velocity),
        }
    }

    /// Commit to the preceding view, or snap back at the first one
    pub fn scroll_to_previous(&mut self, velocity: f32) {
        self.settle_transition();
        match self.previous_index() {
            Some(previous) => {
                self.commit(TransitionKind::Previous, previous, self.live_offset - self.page_extent, velocity)
            }
            None => self.scroll_back(velocity),
        }
    }

    /// Animate the live offset back to zero on the current view
    pub fn scroll_back(&mut self, velocity: f32) {
        self.settle_transition();
        let current = self.current;
        self.commit(TransitionKind::Back, current, self.live_offset, velocity);
    }

    /// Offsets are measured from a settled page, so finish any animation first
    fn settle_transition(&mut self) {
        if let Some(interrupted) = self.interrupt_transition() {
            debug!(?interrupted, "replacing transition in flight");
        }
    }

    fn commit(&mut self, kind: TransitionKind, target: usize, start_offset: f32, velocity: f32) {
        let duration_ms =
            PendingTransition::duration_for(start_offset, velocity, self.transition_min_ms, self.transition_max_ms);
        debug!(?kind, from = self.current, to = target, start_offset, velocity, duration_ms, "page transition");

        self.transition = Some(PendingTransition::new(
            kind,
            self.current,
            target,
            start_offset,
            velocity,
            duration_ms,
        ));
        self.current = target;
        self.live_offset = start_offset;
    }

    /// Transition currently animating, if any
    #[inline]
    pub fn transition(&self) -> Option<&PendingTransition> {
        self.transition.as_ref()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Advance the transition, returning its completion when it settles
    pub fn tick(&mut self, now_ms: f64) -> Option<CompletedTransition> {
        let transition = self.transition.as_mut()?;
        transition.start(now_ms);

        if !transition.is_complete(now_ms) {
            self.live_offset = transition.offset_at(now_ms);
            return None;
        }

        self.live_offset = 0.0;
        self.transition.take().map(|t| t.finish(false))
    }

    /// Stop the transition in flight, settling on its target view
    pub fn interrupt_transition(&mut self) -> Option<CompletedTransition> {
        let transition = self.transition.take()?;
        self.live_offset = 0.0;
        Some(transition.finish(true))
    }
}

//! Gesture state machine for the home screen
//!
//! One pointer session at a time. A press starts the long-press timer;
//! motion past the pan threshold turns the gesture into a page drag; the
//! release either commits a page change, snaps back, completes a widget
//! tap, or (on bare desktop) requests edit mode.

use tracing::{debug, trace, warn};
use crate::config::GestureConfig;
use crate::error::{ConfigError, ForwardError, ViewError};
use crate::forward::{EventForwarder, WindowHandle, WindowSystem};
use crate::math::{Orientation, Point};
use crate::motion::{MotionSampleBuffer, VelocityEstimator};
use crate::view::{CompletedTransition, TransitionKind, ViewPaginationModel};
use crate::widget::Widget;
use super::{GestureState, LongPressTimer, PointerSession, PressedWidget, SessionId, ShellRequest, TimerHandle};

/// Home screen gesture controller
///
/// Owns the pagination model, the motion history, the long-press timer and
/// the event forwarder. All state is touched only from the host's event
/// loop, one event at a time.
pub struct GestureController<W: WindowSystem> {
    config: GestureConfig,
    pagination: ViewPaginationModel,
    forwarder: EventForwarder<W>,
    samples: MotionSampleBuffer,
    session: Option<PointerSession>,
    timer: LongPressTimer,
    next_session: SessionId,
}

impl<W: WindowSystem> GestureController<W> {
    /// Create a controller with an empty set of views
    pub fn new(config: GestureConfig, windows: W) -> Result<Self, ConfigError> {
        config.validate()?;
        let pagination = ViewPaginationModel::from_config(&config).map_err(|_| ConfigError::OutOfRange {
            field: "view_count",
            value: config.view_count as f64,
        })?;

        Ok(Self {
            samples: MotionSampleBuffer::new(config.velocity_window_ms),
            config,
            pagination,
            forwarder: EventForwarder::new(windows),
            session: None,
            timer: LongPressTimer::new(),
            next_session: 1,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[inline]
    pub fn pagination(&self) -> &ViewPaginationModel {
        &self.pagination
    }

    /// Views and widgets can be edited between gestures
    #[inline]
    pub fn pagination_mut(&mut self) -> &mut ViewPaginationModel {
        &mut self.pagination
    }

    #[inline]
    pub fn window_system(&self) -> &W {
        self.forwarder.window_system()
    }

    #[inline]
    pub fn window_system_mut(&mut self) -> &mut W {
        self.forwarder.window_system_mut()
    }

    #[inline]
    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    #[inline]
    pub fn samples(&self) -> &MotionSampleBuffer {
        &self.samples
    }

    /// Live page offset for renderers
    #[inline]
    pub fn current_offset(&self) -> f32 {
        self.pagination.live_offset()
    }

    /// Current view for renderers
    #[inline]
    pub fn current_view_index(&self) -> usize {
        self.pagination.current_index()
    }

    pub fn state(&self) -> GestureState {
        match &self.session {
            None => GestureState::Idle,
            Some(s) if s.over_threshold => GestureState::Panning,
            Some(s) if s.pressed.is_some() => GestureState::PendingClick,
            Some(_) => GestureState::Pressed,
        }
    }

    /// True while the long-press timer of the current session is armed
    #[inline]
    pub fn long_press_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Armed long-press timer and its deadline, for hosts scheduling their own wakeups
    #[inline]
    pub fn long_press_deadline(&self) -> Option<(TimerHandle, f64)> {
        self.timer.deadline()
    }

    /// Switch the scroll axis; refused during a gesture
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), ViewError> {
        if self.session.is_some() {
            return Err(ViewError::GestureInProgress);
        }
        self.pagination.set_orientation(orientation);
        Ok(())
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Press at desktop coordinates; hit-tests the current view
    pub fn feed_press(&mut self, x: f32, y: f32, now_ms: f64) -> Vec<ShellRequest> {
        let point = Point::new(x, y);
        let hit = self.pagination.widget_at(point).cloned();
        self.on_press(point, hit.as_ref(), now_ms)
    }

    pub fn feed_motion(&mut self, x: f32, y: f32, now_ms: f64) -> Vec<ShellRequest> {
        self.on_motion(Point::new(x, y), now_ms)
    }

    pub fn feed_release(&mut self, x: f32, y: f32, now_ms: f64) -> Vec<ShellRequest> {
        self.on_release(Point::new(x, y), now_ms)
    }

    /// Fire the long-press timer if due and advance the page transition
    pub fn tick(&mut self, now_ms: f64) -> Vec<ShellRequest> {
        let mut requests = Vec::new();
        if let Some(handle) = self.timer.due(now_ms) {
            requests.extend(self.on_long_press_fire(handle));
        }
        if let Some(done) = self.pagination.tick(now_ms) {
            requests.push(completed(done));
        }
        requests
    }

    // =========================================================================
    // Press
    // =========================================================================

    /// Start a pointer session. `hit` is the applet under the pointer, if any.
    pub fn on_press(&mut self, point: Point, hit: Option<&Widget>, now_ms: f64) -> Vec<ShellRequest> {
        let mut requests = Vec::new();

        if let Some(active) = &self.session {
            warn!(session = active.id, x = point.x, y = point.y, "press during active gesture ignored");
            return requests;
        }

        if let Some(done) = self.pagination.interrupt_transition() {
            requests.push(completed(done));
        }

        let id = self.next_session;
        self.next_session += 1;
        self.samples.clear();

        let pressed = hit.map(|widget| self.press_widget(widget, point));
        if !hit.is_some_and(|w| w.wants_focus) {
            self.forwarder.focus_desktop();
        }

        if let Some(bg) = self.live_background_window() {
            best_effort(self.forwarder.press(bg, point), "live background press");
        }

        self.timer.arm(id, now_ms + self.config.long_press_ms);
        debug!(session = id, x = point.x, y = point.y, widget = ?pressed.map(|p| p.id), "press");
        self.session = Some(PointerSession::new(id, point, now_ms, pressed));

        requests
    }

    fn press_widget(&mut self, widget: &Widget, point: Point) -> PressedWidget {
        // Enter always goes out so the widget can show its pressed state;
        // a leave cancels it later if the tap does not happen.
        best_effort(self.forwarder.enter(widget.window, point), "widget enter");

        let pending_focus = widget.wants_focus && !self.forwarder.holds_focus(widget.window);
        if !pending_focus {
            best_effort(self.forwarder.press(widget.window, point), "widget press");
        }

        PressedWidget {
            id: widget.id,
            window: widget.window,
            rect: widget.rect,
            pending_focus,
        }
    }

    // =========================================================================
    // Motion
    // =========================================================================

    pub fn on_motion(&mut self, point: Point, now_ms: f64) -> Vec<ShellRequest> {
        let mut requests = Vec::new();

        let mut session = match self.session.take() {
            Some(session) => session,
            None => {
                trace!(x = point.x, y = point.y, "motion without session dropped");
                return requests;
            }
        };

        if let Some(bg) = self.live_background_window() {
            best_effort(self.forwarder.motion(bg, point), "live background motion");
        }

        if session.long_press {
            session.last = point;
            session.last_ms = now_ms;
            self.session = Some(session);
            return requests;
        }

        let axis = self.pagination.orientation().axis();
        let delta = point.delta_along(session.last, axis);
        let dt = (now_ms - session.last_ms).max(0.0);
        self.samples.record(delta, dt);
        session.cumulative += delta;
        session.last = point;
        session.last_ms = now_ms;
        trace!(session = session.id, delta, dt, cumulative = session.cumulative, "motion");

        if let Some(pressed) = session.pressed {
            if point.exceeds_box(session.origin, self.config.click_threshold) {
                best_effort(self.forwarder.leave(pressed.window, session.origin), "widget leave");
                session.pressed = None;
                self.timer.cancel();
                debug!(session = session.id, widget = pressed.id, "tap cancelled by motion");
            }
        }

        let threshold = self.config.pan_threshold;
        if !session.over_threshold && session.cumulative.abs() > threshold {
            session.over_threshold = true;
            self.timer.cancel();
            // Remove the initial jump caused by the threshold
            session.cumulative -= threshold.copysign(session.cumulative);
            self.forwarder.focus_desktop();

            let edges = self.pagination.edge_indicators();
            requests.push(ShellRequest::ShowEdgeIndicators {
                previous: edges.previous,
                next: edges.next,
            });
            debug!(session = session.id, cumulative = session.cumulative, "pan threshold crossed");
        }

        if session.over_threshold {
            self.pagination.set_live_offset(session.cumulative);
        }

        self.session = Some(session);
        requests
    }

    // =========================================================================
    // Release
    // =========================================================================

    pub fn on_release(&mut self, point: Point, now_ms: f64) -> Vec<ShellRequest> {
        if self.session.is_none() {
            trace!(x = point.x, y = point.y, "release without session dropped");
            return Vec::new();
        }

        self.timer.cancel();
        let mut requests = self.on_motion(point, now_ms);

        let session = match self.session.take() {
            Some(session) => session,
            None => return requests,
        };

        if let Some(bg) = self.live_background_window() {
            best_effort(self.forwarder.release(bg, point), "live background release");
        }

        requests.extend(self.resolve_release(&session));
        if session.over_threshold {
            requests.push(ShellRequest::HideEdgeIndicators);
        }

        self.samples.clear();
        debug!(session = session.id, ?requests, "release");
        requests
    }

    fn resolve_release(&mut self, session: &PointerSession) -> Vec<ShellRequest> {
        if session.long_press {
            // The long-press handler already acted
            return Vec::new();
        }

        if session.over_threshold {
            // A pan inside the click box still owes the widget its leave
            if let Some(pressed) = session.pressed {
                best_effort(self.forwarder.leave(pressed.window, session.origin), "widget leave");
            }

            let velocity = VelocityEstimator::estimate(&self.samples, session.cumulative);
            let commit_distance = self.config.commit_distance(self.pagination.page_extent());

            if session.cumulative.abs() >= commit_distance {
                if session.cumulative < 0.0 {
                    self.pagination.scroll_to_next(velocity);
                } else {
                    self.pagination.scroll_to_previous(velocity);
                }
            } else {
                self.pagination.scroll_back(velocity);
            }

            let kind = self
                .pagination
                .transition()
                .map_or(TransitionKind::Back, |t| t.kind);
            return vec![ShellRequest::PageTransition {
                kind,
                index: self.pagination.current_index(),
                velocity,
            }];
        }

        if let Some(pressed) = session.pressed {
            return self.resolve_widget(pressed, session.origin, session.last).into_iter().collect();
        }

        vec![ShellRequest::EnterEditMode]
    }

    /// Complete a widget press: assign focus, deliver the tap, or cancel it
    /// when the pointer left the widget
    fn resolve_widget(&mut self, pressed: PressedWidget, origin: Point, last: Point) -> Option<ShellRequest> {
        if !pressed.rect.contains(last) {
            best_effort(self.forwarder.leave(pressed.window, origin), "widget leave");
            return None;
        }

        if pressed.pending_focus {
            self.forwarder.focus_window(pressed.window);
            Some(ShellRequest::WidgetFocused { widget: pressed.id })
        } else {
            best_effort(self.forwarder.release(pressed.window, origin), "widget release");
            Some(ShellRequest::WidgetClicked { widget: pressed.id })
        }
    }

    // =========================================================================
    // Long press and cancellation
    // =========================================================================

    /// Long-press timer expiry. Stale handles are ignored.
    pub fn on_long_press_fire(&mut self, handle: TimerHandle) -> Vec<ShellRequest> {
        if !self.timer.consume(handle) {
            trace!(?handle, "stale long-press timer ignored");
            return Vec::new();
        }

        let mut session = match self.session.take() {
            Some(session) if session.id == handle.session() => session,
            other => {
                self.session = other;
                return Vec::new();
            }
        };

        session.long_press = true;
        let mut requests = Vec::new();
        if let Some(pressed) = session.pressed.take() {
            requests.extend(self.resolve_widget(pressed, session.origin, session.last));
        }
        requests.push(ShellRequest::EnterEditMode);
        debug!(session = session.id, "long press");

        self.session = Some(session);
        requests
    }

    /// Abandon the gesture (e.g. pointer grab lost) without committing anything
    pub fn cancel(&mut self) -> Vec<ShellRequest> {
        self.timer.cancel();
        self.samples.clear();

        let session = match self.session.take() {
            Some(session) => session,
            None => return Vec::new(),
        };

        if let Some(pressed) = session.pressed {
            best_effort(self.forwarder.leave(pressed.window, session.origin), "widget leave");
        }
        if let Some(bg) = self.live_background_window() {
            best_effort(self.forwarder.release(bg, session.last), "live background release");
        }

        let mut requests = Vec::new();
        if session.over_threshold {
            self.pagination.scroll_back(0.0);
            requests.push(ShellRequest::HideEdgeIndicators);
        }
        debug!(session = session.id, "gesture cancelled");
        requests
    }

    fn live_background_window(&self) -> Option<WindowHandle> {
        self.pagination.live_background().map(|w| w.window)
    }
}

fn completed(done: CompletedTransition) -> ShellRequest {
    ShellRequest::TransitionCompleted {
        kind: done.kind,
        index: done.index,
        interrupted: done.interrupted,
    }
}

fn best_effort(result: Result<(), ForwardError>, what: &'static str) {
    if let Err(err) = result {
        warn!(%err, what, "synthetic event dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::{FocusTarget, HeadlessWindowSystem, SyntheticKind};
    use crate::math::Rect;

    const APPLET_WINDOW: WindowHandle = 100;

    fn controller() -> GestureController<HeadlessWindowSystem> {
        let mut windows = HeadlessWindowSystem::new();
        windows.add_window(APPLET_WINDOW, Rect::new(50.0, 50.0, 100.0, 100.0));
        GestureController::new(GestureConfig::default(), windows).unwrap()
    }

    fn with_applet(wants_focus: bool) -> GestureController<HeadlessWindowSystem> {
        let mut ctl = controller();
        let applet = Widget::applet(1, Rect::new(50.0, 50.0, 100.0, 100.0), APPLET_WINDOW).with_focus(wants_focus);
        ctl.pagination_mut().add_widget(0, applet).unwrap();
        ctl
    }

    fn kinds(ctl: &GestureController<HeadlessWindowSystem>) -> Vec<SyntheticKind> {
        ctl.window_system().sent().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_tap_on_bare_desktop_enters_edit_mode() {
        let mut ctl = controller();
        assert!(ctl.feed_press(300.0, 300.0, 0.0).is_empty());
        assert_eq!(ctl.state(), GestureState::Pressed);

        let requests = ctl.feed_release(300.0, 300.0, 50.0);
        assert_eq!(requests, vec![ShellRequest::EnterEditMode]);
        assert_eq!(ctl.state(), GestureState::Idle);
        assert!(!ctl.long_press_pending());
    }

    #[test]
    fn test_long_press_fires_once_and_release_is_noop() {
        let mut ctl = controller();
        ctl.feed_press(100.0, 100.0, 0.0);

        assert!(ctl.tick(999.0).is_empty());
        assert_eq!(ctl.tick(1000.0), vec![ShellRequest::EnterEditMode]);
        assert!(ctl.tick(1500.0).is_empty());

        assert!(ctl.feed_release(100.0, 100.0, 1600.0).is_empty());
        assert_eq!(ctl.pagination().current_index(), 0);
        assert!(!ctl.pagination().is_transitioning());
    }

    #[test]
    fn test_focus_wanting_widget_gets_focus_not_click() {
        let mut ctl = with_applet(true);
        ctl.feed_press(100.0, 100.0, 0.0);
        assert_eq!(ctl.state(), GestureState::PendingClick);
        ctl.feed_motion(110.0, 105.0, 16.0);

        let requests = ctl.feed_release(110.0, 105.0, 32.0);
        assert_eq!(requests, vec![ShellRequest::WidgetFocused { widget: 1 }]);

        let sent = kinds(&ctl);
        assert!(sent.contains(&SyntheticKind::Enter));
        assert!(!sent.contains(&SyntheticKind::Press));
        assert!(!sent.contains(&SyntheticKind::Release));
        assert_eq!(ctl.window_system().focused(), Some(APPLET_WINDOW));
    }

    #[test]
    fn test_plain_widget_tap_forwards_press_and_release() {
        let mut ctl = with_applet(false);
        ctl.feed_press(100.0, 100.0, 0.0);
        let requests = ctl.feed_release(100.0, 100.0, 40.0);

        assert_eq!(requests, vec![ShellRequest::WidgetClicked { widget: 1 }]);
        assert_eq!(kinds(&ctl), vec![SyntheticKind::Enter, SyntheticKind::Press, SyntheticKind::Release]);
        assert_eq!(ctl.window_system().focus_requests().first(), Some(&FocusTarget::Desktop));
    }

    #[test]
    fn test_click_threshold_cancels_tap() {
        let mut ctl = with_applet(false);
        ctl.feed_press(100.0, 100.0, 0.0);
        // Vertical motion does not pan a horizontal desktop
        ctl.feed_motion(100.0, 145.0, 16.0);

        assert_eq!(ctl.state(), GestureState::Pressed);
        assert!(!ctl.long_press_pending());
        let leave = ctl.window_system().sent().last().copied().unwrap();
        assert_eq!(leave.kind, SyntheticKind::Leave);
        assert_eq!(leave.root, Point::OFF_SCREEN);

        assert_eq!(ctl.feed_release(100.0, 145.0, 32.0), vec![ShellRequest::EnterEditMode]);
    }

    #[test]
    fn test_pan_crossing_subtracts_threshold() {
        let mut ctl = controller();
        ctl.feed_press(100.0, 100.0, 0.0);

        assert!(ctl.feed_motion(90.0, 100.0, 10.0).is_empty());
        assert_eq!(ctl.state(), GestureState::Pressed);

        let requests = ctl.feed_motion(70.0, 100.0, 20.0);
        assert_eq!(requests, vec![ShellRequest::ShowEdgeIndicators { previous: false, next: true }]);
        assert_eq!(ctl.state(), GestureState::Panning);
        assert!((ctl.current_offset() - (-10.0)).abs() < 0.001);
        assert!(!ctl.long_press_pending());
    }

    #[test]
    fn test_short_pan_snaps_back() {
        let mut ctl = controller();
        ctl.feed_press(100.0, 100.0, 0.0);
        ctl.feed_motion(0.0, 100.0, 50.0);

        let requests = ctl.feed_release(0.0, 100.0, 60.0);
        assert!(matches!(requests[0], ShellRequest::PageTransition { kind: TransitionKind::Back, index: 0, .. }));
        assert_eq!(requests[1], ShellRequest::HideEdgeIndicators);
    }

    #[test]
    fn test_press_during_session_is_ignored() {
        let mut ctl = controller();
        ctl.feed_press(100.0, 100.0, 0.0);
        let id = ctl.session().map(|s| s.id);

        assert!(ctl.feed_press(200.0, 200.0, 10.0).is_empty());
        assert_eq!(ctl.session().map(|s| s.id), id);
        assert_eq!(ctl.session().map(|s| s.origin), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_stale_timer_handle_is_ignored() {
        let mut ctl = controller();
        ctl.feed_press(100.0, 100.0, 0.0);
        let (stale, _) = ctl.long_press_deadline().unwrap();
        ctl.feed_release(100.0, 100.0, 10.0);

        ctl.feed_press(100.0, 100.0, 20.0);
        assert!(ctl.on_long_press_fire(stale).is_empty());
        assert!(ctl.long_press_pending());
        assert!(!ctl.session().unwrap().long_press);
    }

    #[test]
    fn test_late_motion_without_session_dropped() {
        let mut ctl = controller();
        assert!(ctl.feed_motion(10.0, 10.0, 0.0).is_empty());
        assert!(ctl.feed_release(10.0, 10.0, 5.0).is_empty());
        assert!(ctl.samples().is_empty());
        assert_eq!(ctl.state(), GestureState::Idle);
    }

    #[test]
    fn test_cancel_resets_everything() {
        let mut ctl = with_applet(true);
        ctl.feed_press(100.0, 100.0, 0.0);
        ctl.feed_motion(95.0, 100.0, 10.0);

        assert!(ctl.cancel().is_empty());
        assert_eq!(ctl.state(), GestureState::Idle);
        assert!(!ctl.long_press_pending());
        assert!(ctl.samples().is_empty());
        assert_eq!(ctl.window_system().sent().last().map(|e| e.kind), Some(SyntheticKind::Leave));
        assert!(ctl.tick(2000.0).is_empty());
    }

    #[test]
    fn test_orientation_locked_during_gesture() {
        let mut ctl = controller();
        ctl.feed_press(100.0, 100.0, 0.0);
        assert!(matches!(ctl.set_orientation(Orientation::Vertical), Err(ViewError::GestureInProgress)));
        ctl.cancel();
        assert!(ctl.set_orientation(Orientation::Vertical).is_ok());
    }
}

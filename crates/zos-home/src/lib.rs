//! Home Screen Gestures for Zero OS
//!
//! This crate turns the raw pointer stream of a touch home screen into
//! navigation, widget interaction and mode changes:
//! - Tap / drag / long-press disambiguation
//! - Flick velocity estimation over a short sliding window
//! - Paginated views with committed page transitions
//! - Synthetic event forwarding into nested widget windows
//!
//! ## Architecture
//!
//! - [`math`]: Geometry (`Point`, `Rect`) and scroll `Orientation`
//! - [`config`]: Thresholds and timing (`GestureConfig`)
//! - [`motion`]: Motion sample history and velocity estimation
//! - [`widget`]: Applets and live backgrounds placed on views
//! - [`view`]: Views, pagination and page transitions
//! - [`forward`]: Window system seam and event forwarding
//! - [`gesture`]: The gesture state machine and its shell requests
//!
//! ## Example
//!
//! ```rust
//! use zos_home::{GestureConfig, GestureController, HeadlessWindowSystem, ShellRequest};
//!
//! let mut home = GestureController::new(GestureConfig::default(), HeadlessWindowSystem::new()).unwrap();
//!
//! home.feed_press(300.0, 300.0, 0.0);
//! let requests = home.feed_release(300.0, 300.0, 40.0);
//! assert_eq!(requests, vec![ShellRequest::EnterEditMode]);
//! ```
//!
//! Time is always passed in by the host (`now_ms`), so the whole engine is
//! deterministic under test.

pub mod math;
pub mod config;
pub mod error;
pub mod motion;
pub mod widget;
pub mod view;
pub mod forward;
pub mod gesture;

// Re-export core types for convenience
pub use math::{Axis, Orientation, Point, Rect};
pub use config::GestureConfig;
pub use error::{ConfigError, ForwardError, ViewError};
pub use motion::{MotionSample, MotionSampleBuffer, VelocityEstimator};
pub use widget::{Widget, WidgetId, WidgetKind};
pub use view::{CompletedTransition, EdgeIndicators, PendingTransition, TransitionKind, View, ViewPaginationModel};
pub use forward::{
    EventForwarder, FocusTarget, HeadlessWindowSystem, SyntheticEvent, SyntheticKind, Translation, WindowHandle,
    WindowSystem,
};
pub use gesture::{GestureController, GestureState, PointerSession, PressedWidget, ShellRequest, TimerHandle};

pub use config::{
    CLICK_THRESHOLD, COMMIT_FRACTION, DEFAULT_PAGE_EXTENT, LONG_PRESS_DURATION_MS, PAN_THRESHOLD, VELOCITY_WINDOW_MS,
};

//! Gesture thresholds and pagination parameters

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::Orientation;

/// Displacement along the scroll axis that commits a gesture to panning (px)
pub const PAN_THRESHOLD: f32 = 20.0;
/// Displacement from the press origin that cancels a pending widget tap (px)
pub const CLICK_THRESHOLD: f32 = 40.0;
/// Hold duration that turns a press into a long-press (ms)
pub const LONG_PRESS_DURATION_MS: f64 = 1000.0;
/// Fraction of the page extent a pan must cover to change page
pub const COMMIT_FRACTION: f32 = 0.25;
/// Look-back window for flick velocity estimation (ms)
pub const VELOCITY_WINDOW_MS: f64 = 125.0;
/// Width of a landscape page (px)
pub const DEFAULT_PAGE_EXTENT: f32 = 800.0;
/// Views available on the home screen
pub const DEFAULT_VIEW_COUNT: usize = 4;
/// Bounds of the page transition duration (ms)
pub const TRANSITION_MIN_MS: f64 = 150.0;
pub const TRANSITION_MAX_MS: f64 = 500.0;

/// Configuration for the gesture controller and pagination model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_pan_threshold")]
    pub pan_threshold: f32,
    #[serde(default = "default_click_threshold")]
    pub click_threshold: f32,
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: f64,
    #[serde(default = "default_commit_fraction")]
    pub commit_fraction: f32,
    #[serde(default = "default_velocity_window_ms")]
    pub velocity_window_ms: f64,
    /// Page size along the scroll axis
    #[serde(default = "default_page_extent")]
    pub page_extent: f32,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_view_count")]
    pub view_count: usize,
    #[serde(default = "default_transition_min_ms")]
    pub transition_min_ms: f64,
    #[serde(default = "default_transition_max_ms")]
    pub transition_max_ms: f64,
}

fn default_pan_threshold() -> f32 {
    PAN_THRESHOLD
}

fn default_click_threshold() -> f32 {
    CLICK_THRESHOLD
}

fn default_long_press_ms() -> f64 {
    LONG_PRESS_DURATION_MS
}

fn default_commit_fraction() -> f32 {
    COMMIT_FRACTION
}

fn default_velocity_window_ms() -> f64 {
    VELOCITY_WINDOW_MS
}

fn default_page_extent() -> f32 {
    DEFAULT_PAGE_EXTENT
}

fn default_view_count() -> usize {
    DEFAULT_VIEW_COUNT
}

fn default_transition_min_ms() -> f64 {
    TRANSITION_MIN_MS
}

fn default_transition_max_ms() -> f64 {
    TRANSITION_MAX_MS
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_threshold: PAN_THRESHOLD,
            click_threshold: CLICK_THRESHOLD,
            long_press_ms: LONG_PRESS_DURATION_MS,
            commit_fraction: COMMIT_FRACTION,
            velocity_window_ms: VELOCITY_WINDOW_MS,
            page_extent: DEFAULT_PAGE_EXTENT,
            orientation: Orientation::default(),
            view_count: DEFAULT_VIEW_COUNT,
            transition_min_ms: TRANSITION_MIN_MS,
            transition_max_ms: TRANSITION_MAX_MS,
        }
    }
}

impl GestureConfig {
    /// Decode a configuration from JSON, filling omitted fields with defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Pan distance required to commit a page change on pages of `page_extent`
    #[inline]
    pub fn commit_distance(&self, page_extent: f32) -> f32 {
        self.commit_fraction * page_extent
    }

    /// Check every field is within its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("pan_threshold", self.pan_threshold as f64)?;
        positive("click_threshold", self.click_threshold as f64)?;
        positive("long_press_ms", self.long_press_ms)?;
        positive("velocity_window_ms", self.velocity_window_ms)?;
        positive("page_extent", self.page_extent as f64)?;
        positive("transition_min_ms", self.transition_min_ms)?;

        if !(self.commit_fraction > 0.0 && self.commit_fraction <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "commit_fraction",
                value: self.commit_fraction as f64,
            });
        }
        if self.view_count == 0 {
            return Err(ConfigError::OutOfRange { field: "view_count", value: 0.0 });
        }
        if self.transition_max_ms < self.transition_min_ms {
            return Err(ConfigError::OutOfRange {
                field: "transition_max_ms",
                value: self.transition_max_ms,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GestureConfig::default();
        assert!((config.pan_threshold - 20.0).abs() < 0.001);
        assert!((config.click_threshold - 40.0).abs() < 0.001);
        assert!((config.long_press_ms - 1000.0).abs() < 0.001);
        assert!((config.commit_distance(config.page_extent) - 200.0).abs() < 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_fills_defaults() {
        let config = GestureConfig::from_json(r#"{"orientation":"vertical","page_extent":480}"#).unwrap();
        assert_eq!(config.orientation, Orientation::Vertical);
        assert!((config.page_extent - 480.0).abs() < 0.001);
        assert!((config.velocity_window_ms - 125.0).abs() < 0.001);
        assert_eq!(config.view_count, 4);
    }

    #[test]
    fn test_from_json_rejects_bad_fraction() {
        let err = GestureConfig::from_json(r#"{"commit_fraction":1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "commit_fraction", .. }));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(GestureConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_zero_views() {
        let config = GestureConfig { view_count: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_transition_bounds() {
        let config = GestureConfig {
            transition_min_ms: 600.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

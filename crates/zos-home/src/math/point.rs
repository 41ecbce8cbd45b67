//! Pointer position in desktop or window-local coordinates

use serde::{Deserialize, Serialize};
use super::Axis;

/// A pointer position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Position reported for crossing events that cancel an interaction.
    /// Lies outside every window so receivers never treat it as a hit.
    pub const OFF_SCREEN: Point = Point { x: -10.0, y: -10.0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along one axis
    #[inline]
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Signed displacement from `from` to `self` along one axis
    #[inline]
    pub fn delta_along(self, from: Point, axis: Axis) -> f32 {
        self.along(axis) - from.along(axis)
    }

    /// True if either axis moved further than `threshold` from `origin`
    #[inline]
    pub fn exceeds_box(self, origin: Point, threshold: f32) -> bool {
        (self.x - origin.x).abs() > threshold || (self.y - origin.y).abs() > threshold
    }
}

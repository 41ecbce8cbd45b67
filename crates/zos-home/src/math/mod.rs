//! Math primitives for pointer coordinates and hit testing

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;

use serde::{Deserialize, Serialize};

/// Scroll orientation of the paginated container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Pages laid out left to right (landscape)
    #[default]
    Horizontal,
    /// Pages laid out top to bottom (portrait)
    Vertical,
}

impl Orientation {
    /// Axis along which pointer motion pans the pages
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::X,
            Orientation::Vertical => Axis::Y,
        }
    }
}

/// A single screen axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

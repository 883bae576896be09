//! Pallet bounds and boundary clamping.

use palletkit_core::error::{LayoutError, Result};
use palletkit_core::geometry::{clamp, Point};
use serde::{Deserialize, Serialize};

/// The bounded rectangular work surface. All placed workpieces must lie
/// within `[0, width] x [0, height]` after constraint application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    /// Pallet width in mm (Y-axis length in the machine convention).
    pub width: f64,
    /// Pallet height in mm (X-axis length in the machine convention).
    pub height: f64,
}

impl Pallet {
    /// Creates a pallet, rejecting non-positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidDimensions { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Clamps a top-left position so a `item_width x item_height` rectangle
    /// stays inside the pallet. Items larger than the pallet collapse to
    /// the origin on the oversized axis.
    pub fn clamp_position(&self, position: Point, item_width: f64, item_height: f64) -> Point {
        Point::new(
            clamp(position.x, 0.0, self.width - item_width),
            clamp(position.y, 0.0, self.height - item_height),
        )
    }

    /// Whether a rectangle at `position` with the given size lies fully
    /// inside the pallet.
    pub fn contains(&self, position: Point, item_width: f64, item_height: f64) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.x + item_width <= self.width
            && position.y + item_height <= self.height
    }
}

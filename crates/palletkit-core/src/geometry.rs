//! Geometry primitives and pure placement helpers.
//!
//! Everything here is stateless: points, axis-aligned rectangles, clamping,
//! grid snapping and tolerance-aware overlap testing.

use serde::{Deserialize, Serialize};

/// Pallet axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// A point in pallet coordinates (mm, origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta(&self, other: &Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle in pallet coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Clamps `value` into `[min, max]`.
///
/// When `max < min` (item larger than the container) the result collapses
/// to `min`, matching the clamp-to-origin behavior of boundary constraints.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Rounds `value` to the nearest multiple of `grid_size`.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Tolerance-aware overlap test for two axis-aligned rectangles.
///
/// Interiors must intersect by more than `tolerance` on both axes for the
/// rectangles to count as overlapping; rectangles that merely touch along
/// an edge do not collide.
pub fn rects_overlap(a: &Rect, b: &Rect, tolerance: f64) -> bool {
    let overlap_x = (a.right() - tolerance) > b.left && (a.left + tolerance) < b.right();
    let overlap_y = (a.bottom() - tolerance) > b.top && (a.top + tolerance) < b.bottom();
    overlap_x && overlap_y
}

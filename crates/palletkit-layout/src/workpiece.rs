//! Workpiece model: a placed, draggable, rotatable rectangular item.

use palletkit_core::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Orientation of a workpiece in 90 degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation angle in degrees, normalized to `[0, 360)`.
    pub fn degrees(&self) -> f64 {
        match self {
            Rotation::Deg0 => 0.0,
            Rotation::Deg90 => 90.0,
            Rotation::Deg180 => 180.0,
            Rotation::Deg270 => 270.0,
        }
    }

    /// Builds a rotation from an angle in degrees; any multiple of 90 is
    /// accepted, other angles round down to the nearest step.
    pub fn from_degrees(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        match (normalized / 90.0) as u32 {
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            3 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    /// The next orientation clockwise (+90).
    pub fn rotated_cw(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// The next orientation counter-clockwise (-90).
    pub fn rotated_ccw(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Whether this orientation swaps width and height.
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// A placed rectangular item on the pallet.
///
/// The block dimensions plus the margins form the outer bounding rectangle
/// used for placement and collision; the base block itself is a rendering
/// concern. Fixed blocks are part of the pallet fixture: draggable but never
/// selected, rotated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workpiece {
    /// Stable identifier, unique within a layout.
    pub id: u64,
    /// Display name ("Block1".."Block3" for fixtures, "Workpiece{id}" otherwise).
    pub name: String,
    /// Top-left corner of the outer bounding rectangle.
    pub position: Point,
    /// Unrotated block width.
    pub base_width: f64,
    /// Unrotated block height.
    pub base_height: f64,
    /// Horizontal margin added on each side of the block.
    pub x_margin: f64,
    /// Vertical margin added on each side of the block.
    pub y_margin: f64,
    /// Current orientation.
    pub rotation: Rotation,
    /// Fixed seed blocks survive clear/delete and are never selected.
    pub fixed: bool,
    /// Selection highlight flag.
    pub selected: bool,
}

impl Workpiece {
    /// Creates a user workpiece at the given position.
    pub fn new(
        id: u64,
        position: Point,
        base_width: f64,
        base_height: f64,
        x_margin: f64,
        y_margin: f64,
    ) -> Self {
        Self {
            id,
            name: format!("Workpiece{}", id),
            position,
            base_width,
            base_height,
            x_margin,
            y_margin,
            rotation: Rotation::Deg0,
            fixed: false,
            selected: false,
        }
    }

    /// Creates a fixed seed block (zero margin, never selectable).
    pub fn fixed_block(id: u64, position: Point, width: f64, height: f64) -> Self {
        Self {
            id,
            name: format!("Block{}", id),
            position,
            base_width: width,
            base_height: height,
            x_margin: 0.0,
            y_margin: 0.0,
            rotation: Rotation::Deg0,
            fixed: true,
            selected: false,
        }
    }

    /// Outer width at the current orientation (margins swap with the block).
    pub fn effective_width(&self) -> f64 {
        if self.rotation.swaps_dimensions() {
            self.base_height + 2.0 * self.y_margin
        } else {
            self.base_width + 2.0 * self.x_margin
        }
    }

    /// Outer height at the current orientation.
    pub fn effective_height(&self) -> f64 {
        if self.rotation.swaps_dimensions() {
            self.base_width + 2.0 * self.x_margin
        } else {
            self.base_height + 2.0 * self.y_margin
        }
    }

    /// Outer bounding rectangle at the current position and orientation.
    pub fn outer_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.effective_width(),
            self.effective_height(),
        )
    }

    /// Outer bounding rectangle at a candidate position.
    pub fn outer_rect_at(&self, position: Point) -> Rect {
        Rect::new(
            position.x,
            position.y,
            self.effective_width(),
            self.effective_height(),
        )
    }

    /// Center point of the outer rectangle.
    pub fn center(&self) -> Point {
        self.outer_rect().center()
    }

    /// Moves the piece so its outer rectangle is centered on `center`.
    pub fn set_center(&mut self, center: Point) {
        self.position = Point::new(
            center.x - self.effective_width() / 2.0,
            center.y - self.effective_height() / 2.0,
        );
    }
}

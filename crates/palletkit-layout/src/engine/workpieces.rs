//! Workpiece lifecycle operations, toggles and live settings changes.

use super::{LayoutEngine, FIXED_BLOCK_SEATS};
use palletkit_core::error::{LayoutError, Result};
use palletkit_core::event::LayoutEvent;
use palletkit_core::geometry::Point;
use tracing::{debug, info};

impl LayoutEngine {
    /// Deletes the most recently added workpiece (highest non-fixed id).
    /// A no-op when only fixed blocks remain.
    ///
    /// Returns the deleted id, if any.
    pub fn delete_last(&mut self) -> Option<u64> {
        let id = self.layout.last_workpiece_id()?;
        self.layout.remove(id);
        self.selection.clear_if_selected(id);
        debug!("Deleted workpiece {}", id);
        self.push_snapshot();
        self.events.publish(LayoutEvent::LayoutChanged);
        Some(id)
    }

    /// Removes every workpiece, keeping the fixed blocks, and resets the
    /// placement cursor. Returns how many pieces were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.layout.clear_workpieces();
        self.selection.deselect_all(&mut self.layout);
        self.events.publish(LayoutEvent::SelectionChanged(None));
        self.cursor = Point::default();
        info!("Cleared {} workpieces", removed);
        self.push_snapshot();
        self.events.publish(LayoutEvent::LayoutChanged);
        removed
    }

    /// Restores the fixture state: workpieces removed, fixed blocks back
    /// at their seed positions, selection cleared, cursor at the origin.
    pub fn reset_layout(&mut self) {
        self.layout.clear_workpieces();
        for (id, x, y) in FIXED_BLOCK_SEATS {
            if let Some(block) = self.layout.get_mut(id) {
                block.position = Point::new(x, y);
            }
        }
        self.selection.deselect_all(&mut self.layout);
        self.events.publish(LayoutEvent::SelectionChanged(None));
        self.cursor = Point::default();
        info!("Layout reset");
        self.push_snapshot();
        self.events.publish(LayoutEvent::LayoutChanged);
    }

    /// Toggles grid snapping; returns the new state.
    pub fn toggle_grid_snap(&mut self) -> bool {
        self.snap_to_grid = !self.snap_to_grid;
        debug!("Grid snap {}", if self.snap_to_grid { "on" } else { "off" });
        self.snap_to_grid
    }

    /// Toggles collision detection; returns the new state.
    pub fn toggle_collision_detection(&mut self) -> bool {
        self.collision_detection = !self.collision_detection;
        debug!(
            "Collision detection {}",
            if self.collision_detection { "on" } else { "off" }
        );
        self.collision_detection
    }

    /// Resizes the pallet, re-clamping every placed piece into the new
    /// bounds. Takes effect immediately.
    pub fn set_platform_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.pallet = crate::pallet::Pallet::new(width, height)?;
        for piece in self.layout.iter_mut() {
            piece.position = self.pallet.clamp_position(
                piece.position,
                piece.effective_width(),
                piece.effective_height(),
            );
        }
        info!("Platform resized to {} x {}", width, height);
        self.events.publish(LayoutEvent::LayoutChanged);
        Ok(())
    }

    /// Sets the block size applied to subsequently added workpieces.
    /// Existing pieces keep their dimensions.
    pub fn set_block_size(&mut self, width: f64, height: f64) -> Result<()> {
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidDimensions { width, height }.into());
        }
        self.block_width = width;
        self.block_height = height;
        info!("Block size set to {} x {}", width, height);
        Ok(())
    }
}

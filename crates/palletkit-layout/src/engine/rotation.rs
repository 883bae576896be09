//! Selection-based workpiece rotation.

use super::LayoutEngine;
use crate::collision::find_collision;
use palletkit_core::error::{LayoutError, Result};
use palletkit_core::event::LayoutEvent;
use std::time::Instant;
use tracing::debug;

impl LayoutEngine {
    /// Rotates the selected workpiece 90 degrees counter-clockwise.
    pub fn rotate_left(&mut self) -> Result<bool> {
        self.rotate_selected(false)
    }

    /// Rotates the selected workpiece 90 degrees clockwise.
    pub fn rotate_right(&mut self) -> Result<bool> {
        self.rotate_selected(true)
    }

    /// Rotates the selection by one 90 degree step, preserving the piece's
    /// center across the dimension swap, then re-runs the constraint
    /// pipeline on the rotated footprint: boundary clamp first, collision
    /// second. A blocked rotation is rejected wholesale and leaves the
    /// piece untouched.
    ///
    /// Returns `Ok(true)` when the rotation was applied, `Ok(false)` when
    /// it was blocked by a collision.
    pub fn rotate_selected(&mut self, clockwise: bool) -> Result<bool> {
        let id = self.selection.selected_id().ok_or(LayoutError::NoSelection)?;
        let piece = self
            .layout
            .get(id)
            .ok_or(LayoutError::WorkpieceNotFound { id })?;

        let center = piece.center();
        let mut rotated = piece.clone();
        rotated.rotation = if clockwise {
            rotated.rotation.rotated_cw()
        } else {
            rotated.rotation.rotated_ccw()
        };
        rotated.set_center(center);
        rotated.position = self.pallet.clamp_position(
            rotated.position,
            rotated.effective_width(),
            rotated.effective_height(),
        );

        if self.collision_detection {
            if let Some(blocking) = find_collision(&self.layout, id, &rotated.outer_rect()) {
                debug!("Rotation of {} blocked by {}", id, blocking);
                self.feedback.flash_collision(blocking, Instant::now());
                self.events.publish(LayoutEvent::CollisionRejected {
                    moving: id,
                    blocking,
                });
                return Ok(false);
            }
        }

        debug!(
            "Rotated {} to {} degrees at ({}, {})",
            id,
            rotated.rotation.degrees(),
            rotated.position.x,
            rotated.position.y
        );
        if let Some(live) = self.layout.get_mut(id) {
            *live = rotated;
        }
        self.push_snapshot();
        self.events.publish(LayoutEvent::LayoutChanged);
        Ok(true)
    }
}

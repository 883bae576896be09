//! Drag gesture state machine: pointer down, constrained move, release.

use super::LayoutEngine;
use crate::collision::find_collision;
use palletkit_core::error::{LayoutError, Result};
use palletkit_core::event::LayoutEvent;
use palletkit_core::geometry::{Point, Rect};
use std::time::Instant;
use tracing::debug;

/// An in-progress drag: the pointer anchor and the piece's position at the
/// last accepted move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// The piece being dragged.
    pub piece_id: u64,
    /// Pointer position at the anchor.
    pub pointer_start: Point,
    /// Piece position at the anchor.
    pub piece_start: Point,
}

impl LayoutEngine {
    /// Begins a drag on the piece under the pointer. Selects the piece
    /// when it is a workpiece; fixed blocks drag without selection.
    pub fn pointer_down(&mut self, id: u64, position: Point) -> Result<()> {
        let piece = self
            .layout
            .get(id)
            .ok_or(LayoutError::WorkpieceNotFound { id })?;
        let fixed = piece.fixed;
        let piece_start = piece.position;

        self.drag = Some(DragGesture {
            piece_id: id,
            pointer_start: position,
            piece_start,
        });
        debug!("Begin drag on {} at ({}, {})", id, position.x, position.y);

        if !fixed {
            self.selection.select(&mut self.layout, id);
            self.events
                .publish(LayoutEvent::SelectionChanged(Some(id)));
        }
        Ok(())
    }

    /// Moves the dragged piece to the pointer-derived candidate position,
    /// applying grid snap, boundary clamp and collision rejection in that
    /// order. A colliding candidate is rejected outright and the drag
    /// anchor resets to the piece's last accepted position, so the next
    /// move delta starts fresh.
    ///
    /// Returns `true` when the piece actually moved. A no-op outside an
    /// active gesture.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        let Some(gesture) = self.drag else {
            return false;
        };

        let Some(piece) = self.layout.get(gesture.piece_id) else {
            // Piece vanished mid-gesture (snapshot restore); drop the drag.
            self.drag = None;
            return false;
        };
        let width = piece.effective_width();
        let height = piece.effective_height();
        let anchor = piece.position;

        let (dx, dy) = position.delta(&gesture.pointer_start);
        let candidate = Point::new(gesture.piece_start.x + dx, gesture.piece_start.y + dy);
        let candidate = self.constrain(candidate, width, height);

        if self.collision_detection {
            let candidate_rect = Rect::new(candidate.x, candidate.y, width, height);
            if let Some(blocking) = find_collision(&self.layout, gesture.piece_id, &candidate_rect)
            {
                debug!(
                    "Move of {} to ({}, {}) blocked by {}",
                    gesture.piece_id, candidate.x, candidate.y, blocking
                );
                self.drag = Some(DragGesture {
                    piece_id: gesture.piece_id,
                    pointer_start: position,
                    piece_start: anchor,
                });
                self.feedback.flash_collision(blocking, Instant::now());
                self.events.publish(LayoutEvent::CollisionRejected {
                    moving: gesture.piece_id,
                    blocking,
                });
                return false;
            }
        }

        if let Some(piece) = self.layout.get_mut(gesture.piece_id) {
            piece.position = candidate;
        }
        true
    }

    /// Ends the drag and records the resulting layout in history. A drag
    /// that never moved still pushes a snapshot.
    pub fn pointer_up(&mut self) {
        if let Some(gesture) = self.drag.take() {
            debug!("End drag on {}", gesture.piece_id);
            self.push_snapshot();
            self.events.publish(LayoutEvent::LayoutChanged);
        }
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

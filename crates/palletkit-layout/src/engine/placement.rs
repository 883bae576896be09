//! Batch workpiece placement.

use super::LayoutEngine;
use crate::workpiece::Workpiece;
use palletkit_core::error::{LayoutError, Result};
use palletkit_core::event::LayoutEvent;
use palletkit_core::geometry::{Axis, Point};
use tracing::{debug, info};

/// Slack for exact-fit comparisons so a batch that fills the pallet to the
/// millimeter is not rejected by float noise.
const FIT_EPSILON: f64 = 1e-9;

impl LayoutEngine {
    /// Adds a batch of workpieces along one axis, continuing from the
    /// placement cursor left by the previous batch.
    ///
    /// Exactly one of `x_count`/`y_count` must be positive. The requested
    /// span is prechecked against the pallet before anything is placed;
    /// a batch that cannot fit fails wholesale with `BoundaryExceeded`
    /// carrying the maximum feasible count. During placement the cursor
    /// wraps to a new row (or column) when the current one fills up; if
    /// wrapping cannot fit either, the remainder is abandoned but pieces
    /// already placed are kept.
    ///
    /// Returns the number of pieces placed.
    pub fn add_workpieces(
        &mut self,
        x_count: u32,
        y_count: u32,
        x_margin: f64,
        y_margin: f64,
    ) -> Result<usize> {
        if (x_count > 0) == (y_count > 0) {
            return Err(LayoutError::InvalidAxisSelection.into());
        }

        let outer_width = self.block_width + 2.0 * x_margin;
        let outer_height = self.block_height + 2.0 * y_margin;
        let (axis, requested) = if x_count > 0 {
            (Axis::X, x_count)
        } else {
            (Axis::Y, y_count)
        };

        self.check_boundary(axis, requested, outer_width, outer_height)?;

        let mut placed = 0;
        for _ in 0..requested {
            if !self.advance_cursor_to_fit(axis, outer_width, outer_height) {
                info!(
                    "Pallet full after {} of {} workpieces, keeping the placed ones",
                    placed, requested
                );
                self.feedback
                    .show_message("Pallet full", std::time::Instant::now());
                self.events
                    .publish(LayoutEvent::TemporaryMessage("Pallet full".to_string()));
                break;
            }

            let id = self.layout.generate_id();
            let piece = Workpiece::new(
                id,
                self.cursor,
                self.block_width,
                self.block_height,
                x_margin,
                y_margin,
            );
            debug!(
                "Placed workpiece {} at ({}, {})",
                id, self.cursor.x, self.cursor.y
            );
            self.layout.insert(piece);
            placed += 1;

            match axis {
                Axis::X => self.cursor.x += outer_width,
                Axis::Y => self.cursor.y += outer_height,
            }
        }

        self.push_snapshot();
        self.events.publish(LayoutEvent::LayoutChanged);
        if placed == requested as usize {
            let text = format!("Added {} workpieces", placed);
            self.feedback.show_message(&text, std::time::Instant::now());
            self.events.publish(LayoutEvent::TemporaryMessage(text));
        }
        Ok(placed)
    }

    /// Precheck: the whole batch must fit the pallet extent along the
    /// chosen axis. Failing this places nothing.
    fn check_boundary(
        &self,
        axis: Axis,
        requested: u32,
        outer_width: f64,
        outer_height: f64,
    ) -> Result<()> {
        let (span, extent, per_item) = match axis {
            Axis::X => (
                requested as f64 * outer_width,
                self.pallet.width,
                outer_width,
            ),
            Axis::Y => (
                requested as f64 * outer_height,
                self.pallet.height,
                outer_height,
            ),
        };

        if span > extent + FIT_EPSILON {
            let max_feasible = (extent / per_item).floor().max(0.0) as u32;
            debug!(
                "Batch of {} along {} needs {}mm, pallet extent is {}mm (max {})",
                requested, axis, span, extent, max_feasible
            );
            self.events.publish(LayoutEvent::BoundaryExceeded {
                axis,
                requested,
                max_feasible,
            });
            return Err(LayoutError::BoundaryExceeded {
                axis,
                requested,
                max_feasible,
            }
            .into());
        }
        Ok(())
    }

    /// Wraps the cursor to the next row/column when the next piece would
    /// cross the pallet edge. Returns `false` when the pallet is full.
    fn advance_cursor_to_fit(&mut self, axis: Axis, outer_width: f64, outer_height: f64) -> bool {
        match axis {
            Axis::X => {
                if self.cursor.x + outer_width > self.pallet.width + FIT_EPSILON {
                    self.cursor = Point::new(0.0, self.cursor.y + outer_height);
                }
                self.cursor.y + outer_height <= self.pallet.height + FIT_EPSILON
            }
            Axis::Y => {
                if self.cursor.y + outer_height > self.pallet.height + FIT_EPSILON {
                    self.cursor = Point::new(self.cursor.x + outer_width, 0.0);
                }
                self.cursor.x + outer_width <= self.pallet.width + FIT_EPSILON
            }
        }
    }
}

//! Collision detection over outer bounding rectangles.

use crate::layout::Layout;
use palletkit_core::constants::COLLISION_TOLERANCE;
use palletkit_core::geometry::{rects_overlap, Rect};

/// Tests a candidate rectangle for the moving piece against every other
/// placed piece (fixed blocks included) and returns the id of the first
/// blocking piece, or `None` when the move is legal.
///
/// Boundary containment is not checked here: the engine hard-clamps
/// candidates into the pallet before collision runs, so this stays a pure
/// piece-vs-piece predicate.
pub fn find_collision(layout: &Layout, moving_id: u64, candidate: &Rect) -> Option<u64> {
    layout
        .iter()
        .filter(|p| p.id != moving_id)
        .find(|p| rects_overlap(candidate, &p.outer_rect(), COLLISION_TOLERANCE))
        .map(|p| p.id)
}

//! Layout store: the ordered set of placed workpieces plus id generation
//! and snapshotting for undo/redo.

use crate::workpiece::Workpiece;
use palletkit_core::constants::FIRST_WORKPIECE_ID;
use palletkit_core::geometry::Point;
use serde::{Deserialize, Serialize};

/// Snapshot of the full layout at one instant: the unit of undo/redo.
///
/// Restoring a snapshot fully reconciles the live layout - pieces absent
/// from the snapshot are removed, pieces present only in the snapshot are
/// recreated, and the id generator and placement cursor are restored so a
/// redone batch add continues numbering identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub(crate) pieces: Vec<Workpiece>,
    pub(crate) next_id: u64,
    pub(crate) cursor: Point,
}

/// Ordered collection of workpieces with monotonic id assignment.
#[derive(Debug, Clone)]
pub struct Layout {
    pieces: Vec<Workpiece>,
    next_id: u64,
}

impl Layout {
    /// Creates an empty layout. Workpiece numbering starts above the id
    /// range reserved for fixed seed blocks.
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            next_id: FIRST_WORKPIECE_ID,
        }
    }

    /// Generates the next workpiece id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sets the next id to be generated.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Appends a piece to the layout.
    pub fn insert(&mut self, piece: Workpiece) {
        self.pieces.push(piece);
    }

    /// Gets a piece by id.
    pub fn get(&self, id: u64) -> Option<&Workpiece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Gets a mutable piece by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Workpiece> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }

    /// Removes a piece and returns it.
    pub fn remove(&mut self, id: u64) -> Option<Workpiece> {
        let index = self.pieces.iter().position(|p| p.id == id)?;
        Some(self.pieces.remove(index))
    }

    /// Iterates over all pieces in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Workpiece> {
        self.pieces.iter()
    }

    /// Iterates mutably over all pieces.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Workpiece> {
        self.pieces.iter_mut()
    }

    /// Number of pieces (fixed blocks included).
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Highest id among non-fixed pieces, i.e. the most recently added
    /// workpiece.
    pub fn last_workpiece_id(&self) -> Option<u64> {
        self.pieces
            .iter()
            .filter(|p| !p.fixed)
            .map(|p| p.id)
            .max()
    }

    /// Removes every non-fixed piece, returning how many were removed.
    pub fn clear_workpieces(&mut self) -> usize {
        let before = self.pieces.len();
        self.pieces.retain(|p| p.fixed);
        before - self.pieces.len()
    }

    /// Captures a snapshot of the complete layout state.
    pub fn snapshot(&self, cursor: Point) -> LayoutSnapshot {
        LayoutSnapshot {
            pieces: self.pieces.clone(),
            next_id: self.next_id,
            cursor,
        }
    }

    /// Restores a snapshot, replacing the live pieces wholesale. Returns
    /// the placement cursor recorded in the snapshot.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) -> Point {
        self.pieces = snapshot.pieces.clone();
        self.next_id = snapshot.next_id;
        snapshot.cursor
    }

    /// Replaces the piece list wholesale (used by layout file import).
    pub fn replace_pieces(&mut self, pieces: Vec<Workpiece>) {
        let max_id = pieces
            .iter()
            .filter(|p| !p.fixed)
            .map(|p| p.id)
            .max()
            .unwrap_or(FIRST_WORKPIECE_ID - 1);
        self.next_id = (max_id + 1).max(FIRST_WORKPIECE_ID);
        self.pieces = pieces;
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

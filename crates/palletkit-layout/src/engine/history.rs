//! Snapshot-based undo/redo over the full layout.

use super::LayoutEngine;
use crate::layout::LayoutSnapshot;
use palletkit_core::event::LayoutEvent;
use tracing::debug;

impl LayoutEngine {
    /// Captures the current layout onto the undo stack and clears the redo
    /// stack. Called after every completed mutating user action.
    pub fn push_snapshot(&mut self) {
        self.undo_stack.push(self.layout.snapshot(self.cursor));
        self.redo_stack.clear();
    }

    /// Steps back one snapshot. The initial snapshot is a floor and is
    /// never discarded; undoing at the floor is a no-op.
    ///
    /// Returns `true` when a step was taken.
    pub fn undo(&mut self) -> bool {
        if self.undo_stack.len() <= 1 {
            return false;
        }
        if let Some(current) = self.undo_stack.pop() {
            self.redo_stack.push(current);
        }
        if let Some(snapshot) = self.undo_stack.last().cloned() {
            self.apply_snapshot(&snapshot);
        }
        debug!(
            "Undo: {} undoable, {} redoable",
            self.undo_stack.len() - 1,
            self.redo_stack.len()
        );
        true
    }

    /// Steps forward one snapshot; a no-op when nothing was undone.
    ///
    /// Returns `true` when a step was taken.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.apply_snapshot(&snapshot);
        self.undo_stack.push(snapshot);
        debug!(
            "Redo: {} undoable, {} redoable",
            self.undo_stack.len() - 1,
            self.redo_stack.len()
        );
        true
    }

    /// Whether an undo step is available above the floor.
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Replaces the live layout with a snapshot wholesale: pieces absent
    /// from the snapshot disappear, pieces present only in the snapshot
    /// are recreated, and the id generator and placement cursor follow.
    fn apply_snapshot(&mut self, snapshot: &LayoutSnapshot) {
        self.cursor = self.layout.restore(snapshot);
        self.selection.reconcile(&self.layout);
        self.drag = None;
        self.events.publish(LayoutEvent::LayoutChanged);
    }
}

//! Selection state for the layout engine.

use crate::layout::Layout;

/// Manages workpiece selection state.
///
/// # Selection Model
///
/// - At most one workpiece is selected at a time (stored in `selected_id`)
/// - Selecting a workpiece clears the previous selection's highlight flag
/// - Fixed seed blocks are never selected
///
/// The manager holds the selected id; the pieces in the [`Layout`] carry the
/// `selected` highlight flag the renderer reads.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// The ID of the selected workpiece, if any
    selected_id: Option<u64>,
}

impl SelectionState {
    /// Creates a new `SelectionState` with no selection.
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected workpiece.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Selects a workpiece by id, clearing any previous selection.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout holding the highlight flags
    /// * `id` - The id to select
    ///
    /// # Returns
    ///
    /// `true` when the piece exists and is selectable (not fixed).
    pub fn select(&mut self, layout: &mut Layout, id: u64) -> bool {
        let selectable = layout.get(id).map(|p| !p.fixed).unwrap_or(false);
        if !selectable {
            return false;
        }
        self.deselect_all(layout);
        if let Some(piece) = layout.get_mut(id) {
            piece.selected = true;
        }
        self.selected_id = Some(id);
        true
    }

    /// Clears the selection and all highlight flags.
    pub fn deselect_all(&mut self, layout: &mut Layout) {
        for piece in layout.iter_mut() {
            piece.selected = false;
        }
        self.selected_id = None;
    }

    /// Drops the selection if it references `id` (used on delete).
    pub fn clear_if_selected(&mut self, id: u64) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    /// Re-derives the selected id from the highlight flags after a snapshot
    /// restore replaced the piece list.
    pub fn reconcile(&mut self, layout: &Layout) {
        self.selected_id = layout.iter().find(|p| p.selected).map(|p| p.id);
    }
}

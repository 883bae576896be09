use palletkit_core::geometry::Point;
use palletkit_layout::{EngineParams, LayoutEngine};

fn engine() -> LayoutEngine {
    LayoutEngine::new(EngineParams::default()).unwrap()
}

#[test]
fn fresh_engine_has_nothing_to_undo() {
    let engine = engine();
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
}

#[test]
fn undo_at_the_floor_is_a_noop() {
    let mut engine = engine();
    assert!(!engine.undo());
    assert!(!engine.redo());
    assert!(engine.layout().is_empty());
}

#[test]
fn undo_removes_a_batch_and_redo_restores_it() {
    let mut engine = engine();
    engine.add_workpieces(3, 0, 10.0, 10.0).unwrap();
    assert!(engine.can_undo());

    assert!(engine.undo());
    assert!(engine.layout().is_empty());
    assert!(engine.can_redo());

    assert!(engine.redo());
    assert_eq!(engine.layout().len(), 3);
    assert_eq!(
        engine.pieces().map(|p| p.id).collect::<Vec<_>>(),
        vec![4, 5, 6]
    );
}

#[test]
fn undo_restores_id_numbering_and_cursor() {
    let mut engine = engine();
    engine.add_workpieces(2, 0, 10.0, 10.0).unwrap();
    engine.undo();
    assert_eq!(engine.placement_cursor(), Point::new(0.0, 0.0));

    // Re-adding after the undo reuses the same ids and positions.
    engine.add_workpieces(2, 0, 10.0, 10.0).unwrap();
    assert_eq!(
        engine.pieces().map(|p| p.id).collect::<Vec<_>>(),
        vec![4, 5]
    );
    assert_eq!(engine.placement_cursor(), Point::new(160.0, 0.0));
}

#[test]
fn a_new_action_clears_the_redo_stack() {
    let mut engine = engine();
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();
    engine.undo();
    assert!(engine.can_redo());

    engine.add_workpieces(0, 1, 10.0, 10.0).unwrap();
    assert!(!engine.can_redo());
}

#[test]
fn undo_restores_a_dragged_piece() {
    let mut engine = engine();
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();

    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.pointer_move(Point::new(100.0, 100.0));
    engine.pointer_up();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(100.0, 100.0));

    engine.undo();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(0.0, 0.0));
    engine.redo();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(100.0, 100.0));
}

#[test]
fn selection_follows_the_restored_snapshot() {
    let mut engine = engine();
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();

    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.pointer_up();
    assert_eq!(engine.selected_id(), Some(4));

    // Undo past the selection-carrying snapshots: the piece is gone and
    // the selection with it.
    engine.undo();
    engine.undo();
    assert!(engine.layout().is_empty());
    assert_eq!(engine.selected_id(), None);
}

#[test]
fn fixture_blocks_survive_a_full_undo() {
    let mut engine = LayoutEngine::with_fixed_blocks(EngineParams::default()).unwrap();
    engine.add_workpieces(0, 2, 10.0, 10.0).unwrap();
    engine.undo();

    assert_eq!(engine.layout().len(), 3);
    assert!(engine.pieces().all(|p| p.fixed));
}

#[test]
fn interrupted_drag_is_dropped_by_undo() {
    let mut engine = engine();
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();

    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.undo();
    assert!(!engine.is_dragging());
    // The piece from the undone batch is gone; a stray move is harmless.
    assert!(!engine.pointer_move(Point::new(50.0, 50.0)));
}

use palletkit_core::geometry::Point;
use palletkit_layout::{EngineParams, LayoutEngine};

fn fixture_engine() -> LayoutEngine {
    LayoutEngine::with_fixed_blocks(EngineParams::default()).unwrap()
}

#[test]
fn fixture_blocks_sit_at_their_seed_positions() {
    let engine = fixture_engine();
    let positions: Vec<(u64, Point)> = engine.pieces().map(|p| (p.id, p.position)).collect();
    assert_eq!(
        positions,
        vec![
            (1, Point::new(50.0, 50.0)),
            (2, Point::new(150.0, 50.0)),
            (3, Point::new(250.0, 50.0)),
        ]
    );
    assert!(engine.pieces().all(|p| p.fixed));
}

#[test]
fn delete_last_removes_the_newest_workpiece_only() {
    let mut engine = fixture_engine();
    engine.add_workpieces(0, 2, 10.0, 10.0).unwrap();

    assert_eq!(engine.delete_last(), Some(5));
    assert_eq!(engine.delete_last(), Some(4));
    // Only fixture blocks left; delete is a no-op.
    assert_eq!(engine.delete_last(), None);
    assert_eq!(engine.layout().len(), 3);
}

#[test]
fn delete_last_clears_a_matching_selection() {
    let mut engine = fixture_engine();
    engine.add_workpieces(0, 1, 10.0, 10.0).unwrap();
    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.pointer_up();
    assert_eq!(engine.selected_id(), Some(4));

    engine.delete_last();
    assert_eq!(engine.selected_id(), None);
}

#[test]
fn clear_all_keeps_fixture_blocks_and_resets_the_cursor() {
    let mut engine = fixture_engine();
    engine.add_workpieces(0, 2, 10.0, 10.0).unwrap();
    assert_ne!(engine.placement_cursor(), Point::new(0.0, 0.0));

    assert_eq!(engine.clear_all(), 2);
    assert_eq!(engine.layout().len(), 3);
    assert_eq!(engine.placement_cursor(), Point::new(0.0, 0.0));

    // The next batch starts from the origin again.
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();
    assert_eq!(engine.layout().get(6).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn reset_layout_re_seats_moved_fixture_blocks() {
    let mut engine = fixture_engine();
    engine.pointer_down(1, Point::new(50.0, 50.0)).unwrap();
    engine.pointer_move(Point::new(50.0, 200.0));
    engine.pointer_up();
    assert_eq!(engine.layout().get(1).unwrap().position, Point::new(50.0, 200.0));
    engine.add_workpieces(0, 1, 10.0, 10.0).unwrap();

    engine.reset_layout();
    assert_eq!(engine.layout().len(), 3);
    assert_eq!(engine.layout().get(1).unwrap().position, Point::new(50.0, 50.0));
    assert_eq!(engine.placement_cursor(), Point::new(0.0, 0.0));
}

#[test]
fn toggles_flip_and_report_the_new_state() {
    let mut engine = fixture_engine();
    assert!(engine.grid_snap_enabled());
    assert!(!engine.toggle_grid_snap());
    assert!(engine.toggle_grid_snap());

    assert!(engine.collision_detection_enabled());
    assert!(!engine.toggle_collision_detection());
}

#[test]
fn shrinking_the_platform_re_clamps_placed_pieces() {
    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    engine.add_workpieces(5, 0, 10.0, 10.0).unwrap();

    engine.set_platform_size(200.0, 300.0).unwrap();
    let pallet = engine.pallet();
    assert_eq!(pallet.width, 200.0);
    for piece in engine.pieces() {
        assert!(pallet.contains(piece.position, piece.effective_width(), piece.effective_height()));
    }
}

#[test]
fn invalid_platform_size_is_rejected_and_keeps_the_old_bounds() {
    let mut engine = fixture_engine();
    assert!(engine.set_platform_size(0.0, 300.0).is_err());
    assert_eq!(engine.pallet().width, 400.0);
}

#[test]
fn block_size_changes_apply_to_future_batches_only() {
    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    engine.add_workpieces(1, 0, 0.0, 0.0).unwrap();

    engine.set_block_size(40.0, 20.0).unwrap();
    assert!(engine.set_block_size(-1.0, 20.0).is_err());
    engine.add_workpieces(1, 0, 0.0, 0.0).unwrap();

    let sizes: Vec<(f64, f64)> = engine
        .pieces()
        .map(|p| (p.effective_width(), p.effective_height()))
        .collect();
    assert_eq!(sizes, vec![(60.0, 60.0), (40.0, 20.0)]);
}

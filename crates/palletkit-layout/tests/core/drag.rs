use palletkit_core::event::LayoutEvent;
use palletkit_core::geometry::Point;
use palletkit_layout::{EngineParams, LayoutEngine};

/// Engine with two 80x60 outer workpieces at (0,0) and (80,0).
fn engine_with_two_pieces() -> LayoutEngine {
    let mut engine = LayoutEngine::new(EngineParams {
        block_height: 40.0,
        ..EngineParams::default()
    })
    .unwrap();
    engine.add_workpieces(2, 0, 10.0, 10.0).unwrap();
    engine
}

#[test]
fn drag_selects_and_moves_the_piece() {
    let mut engine = engine_with_two_pieces();
    engine.pointer_down(4, Point::new(10.0, 10.0)).unwrap();
    assert!(engine.is_dragging());
    assert_eq!(engine.selected_id(), Some(4));

    assert!(engine.pointer_move(Point::new(10.0, 110.0)));
    engine.pointer_up();

    assert!(!engine.is_dragging());
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(0.0, 100.0));
}

#[test]
fn grid_snap_rounds_to_the_nearest_step() {
    let mut engine = engine_with_two_pieces();
    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    // Raw candidate (0, 104) snaps to (0, 100).
    engine.pointer_move(Point::new(0.0, 104.0));
    engine.pointer_up();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(0.0, 100.0));
}

#[test]
fn disabling_grid_snap_keeps_the_raw_position() {
    let mut engine = engine_with_two_pieces();
    engine.toggle_grid_snap();
    assert!(!engine.grid_snap_enabled());

    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.pointer_move(Point::new(3.0, 104.0));
    engine.pointer_up();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(3.0, 104.0));
}

#[test]
fn drag_is_clamped_at_the_pallet_edge() {
    let mut engine = engine_with_two_pieces();
    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.pointer_move(Point::new(1000.0, 1000.0));
    engine.pointer_up();

    // 80x60 outer rectangle in a 400x300 pallet.
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(320.0, 240.0));
}

#[test]
fn colliding_move_is_rejected_and_names_the_blocker() {
    let mut engine = engine_with_two_pieces();
    let mut events = engine.subscribe();

    engine.pointer_down(4, Point::new(10.0, 10.0)).unwrap();
    // Candidate (40, 0) overlaps the piece at (80, 0).
    assert!(!engine.pointer_move(Point::new(50.0, 10.0)));
    engine.pointer_up();

    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(0.0, 0.0));
    assert_eq!(engine.feedback().colliding_piece(), Some(5));

    let mut saw_rejection = false;
    while let Ok(event) = events.try_recv() {
        if let LayoutEvent::CollisionRejected { moving, blocking } = event {
            assert_eq!((moving, blocking), (4, 5));
            saw_rejection = true;
        }
    }
    assert!(saw_rejection);
}

#[test]
fn rejected_move_re_anchors_so_the_piece_does_not_jump() {
    let mut engine = engine_with_two_pieces();
    engine.pointer_down(4, Point::new(10.0, 10.0)).unwrap();

    // Blocked push to the right, then a pull downward: the piece moves by
    // the post-rejection delta only.
    assert!(!engine.pointer_move(Point::new(50.0, 10.0)));
    assert!(engine.pointer_move(Point::new(50.0, 110.0)));
    engine.pointer_up();

    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(0.0, 100.0));
}

#[test]
fn edge_adjacent_pieces_do_not_collide() {
    let mut engine = engine_with_two_pieces();
    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    // Exactly below the neighbor's row, touching edges at y=60.
    assert!(engine.pointer_move(Point::new(80.0, 60.0)));
    engine.pointer_up();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(80.0, 60.0));
}

#[test]
fn disabling_collision_detection_allows_overlap() {
    let mut engine = engine_with_two_pieces();
    engine.toggle_collision_detection();

    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    assert!(engine.pointer_move(Point::new(80.0, 0.0)));
    engine.pointer_up();
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(80.0, 0.0));
}

#[test]
fn move_outside_a_gesture_is_a_noop() {
    let mut engine = engine_with_two_pieces();
    assert!(!engine.pointer_move(Point::new(100.0, 100.0)));
    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn fixed_blocks_drag_without_selection() {
    let mut engine = LayoutEngine::with_fixed_blocks(EngineParams::default()).unwrap();
    engine.pointer_down(1, Point::new(50.0, 50.0)).unwrap();
    assert_eq!(engine.selected_id(), None);

    engine.pointer_move(Point::new(50.0, 150.0));
    engine.pointer_up();
    assert_eq!(engine.layout().get(1).unwrap().position, Point::new(50.0, 150.0));
}

use palletkit_core::geometry::Point;
use palletkit_layout::{EngineParams, LayoutCommand, LayoutEngine};

fn engine() -> LayoutEngine {
    LayoutEngine::new(EngineParams::default()).unwrap()
}

#[test]
fn commands_drive_the_full_drag_cycle() {
    let mut engine = engine();
    engine
        .execute(LayoutCommand::AddWorkpieces {
            x_count: 1,
            y_count: 0,
            x_margin: 10.0,
            y_margin: 10.0,
        })
        .unwrap();

    engine
        .execute(LayoutCommand::PointerDown {
            id: 4,
            position: Point::new(0.0, 0.0),
        })
        .unwrap();
    engine
        .execute(LayoutCommand::PointerMove {
            position: Point::new(100.0, 100.0),
        })
        .unwrap();
    engine.execute(LayoutCommand::PointerUp).unwrap();

    assert_eq!(engine.layout().get(4).unwrap().position, Point::new(100.0, 100.0));
}

#[test]
fn rejected_outcomes_are_not_errors() {
    let mut engine = engine();
    // Undo at the floor and a stray move both succeed as no-ops.
    engine.execute(LayoutCommand::Undo).unwrap();
    engine.execute(LayoutCommand::Redo).unwrap();
    engine
        .execute(LayoutCommand::PointerMove {
            position: Point::new(10.0, 10.0),
        })
        .unwrap();
}

#[test]
fn validation_failures_surface_as_errors() {
    let mut engine = engine();
    assert!(engine
        .execute(LayoutCommand::AddWorkpieces {
            x_count: 0,
            y_count: 0,
            x_margin: 0.0,
            y_margin: 0.0,
        })
        .is_err());
    assert!(engine.execute(LayoutCommand::RotateRight).is_err());
    assert!(engine
        .execute(LayoutCommand::SetPlatformSize {
            width: -5.0,
            height: 300.0,
        })
        .is_err());
}

#[test]
fn toggle_and_reset_commands_mutate_engine_state() {
    let mut engine = LayoutEngine::with_fixed_blocks(EngineParams::default()).unwrap();
    engine.execute(LayoutCommand::ToggleGridSnap).unwrap();
    assert!(!engine.grid_snap_enabled());
    engine
        .execute(LayoutCommand::ToggleCollisionDetection)
        .unwrap();
    assert!(!engine.collision_detection_enabled());

    engine
        .execute(LayoutCommand::AddWorkpieces {
            x_count: 2,
            y_count: 0,
            x_margin: 10.0,
            y_margin: 10.0,
        })
        .unwrap();
    engine.execute(LayoutCommand::DeleteLast).unwrap();
    assert_eq!(engine.layout().len(), 4);

    engine.execute(LayoutCommand::ResetLayout).unwrap();
    assert_eq!(engine.layout().len(), 3);
}

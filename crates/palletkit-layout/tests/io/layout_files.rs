use palletkit_core::geometry::Point;
use palletkit_layout::{EngineParams, LayoutEngine, LayoutFile, Rotation};
use tempfile::tempdir;

#[test]
fn save_and_load_round_trip_through_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut engine = LayoutEngine::with_fixed_blocks(EngineParams::default()).unwrap();
    engine.add_workpieces(3, 0, 10.0, 10.0).unwrap();
    engine.pointer_down(4, Point::new(0.0, 0.0)).unwrap();
    engine.pointer_move(Point::new(0.0, 200.0));
    engine.pointer_up();
    assert!(engine.rotate_right().unwrap());
    engine.save_layout_file(&path).unwrap();

    let saved: Vec<(u64, Point, Rotation)> = engine
        .pieces()
        .map(|p| (p.id, p.position, p.rotation))
        .collect();

    let mut restored = LayoutEngine::with_fixed_blocks(EngineParams::default()).unwrap();
    restored.clear_all();
    assert_eq!(restored.load_layout_file(&path).unwrap(), 6);

    let loaded: Vec<(u64, Point, Rotation)> = restored
        .pieces()
        .map(|p| (p.id, p.position, p.rotation))
        .collect();
    assert_eq!(loaded, saved);

    // Outer footprints carry over even though margins collapse on load.
    for (piece, original) in restored.pieces().zip(engine.pieces()) {
        assert_eq!(piece.effective_width(), original.effective_width());
        assert_eq!(piece.effective_height(), original.effective_height());
    }
}

#[test]
fn loading_replaces_the_current_layout_wholesale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    engine.add_workpieces(2, 0, 10.0, 10.0).unwrap();
    engine.save_layout_file(&path).unwrap();

    engine.add_workpieces(0, 3, 10.0, 10.0).unwrap();
    assert_eq!(engine.layout().len(), 5);

    engine.load_layout_file(&path).unwrap();
    assert_eq!(engine.layout().len(), 2);
    // Numbering resumes above the loaded ids.
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();
    assert_eq!(engine.layout().last_workpiece_id(), Some(6));
}

#[test]
fn loading_is_undoable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    engine.add_workpieces(1, 0, 10.0, 10.0).unwrap();
    engine.save_layout_file(&path).unwrap();

    engine.clear_all();
    engine.load_layout_file(&path).unwrap();
    assert_eq!(engine.layout().len(), 1);

    engine.undo();
    assert!(engine.layout().is_empty());
    engine.redo();
    assert_eq!(engine.layout().len(), 1);
}

#[test]
fn legacy_files_without_dimensions_use_the_engine_block_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{"Elements":[
            {"Name":"Block1","Left":50.0,"Top":50.0},
            {"Name":"Workpiece4","Left":0.0,"Top":150.0}
        ]}"#,
    )
    .unwrap();

    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    assert_eq!(engine.load_layout_file(&path).unwrap(), 2);

    let block = engine.layout().get(1).unwrap();
    assert!(block.fixed);
    assert_eq!(block.effective_width(), 60.0);
    let piece = engine.layout().get(4).unwrap();
    assert!(!piece.fixed);
    assert_eq!(piece.position, Point::new(0.0, 150.0));
}

#[test]
fn malformed_files_are_rejected() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("does_not_exist.json");
    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    assert!(engine.load_layout_file(&missing).is_err());

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    assert!(engine.load_layout_file(&garbage).is_err());

    let bad_name = dir.path().join("bad_name.json");
    std::fs::write(
        &bad_name,
        r#"{"Elements":[{"Name":"Widget1","Left":0.0,"Top":0.0}]}"#,
    )
    .unwrap();
    assert!(engine.load_layout_file(&bad_name).is_err());
    // A failed load leaves the layout untouched.
    assert!(engine.layout().is_empty());
}

#[test]
fn exported_state_round_trips_in_memory() {
    let mut engine = LayoutEngine::new(EngineParams::default()).unwrap();
    engine.add_workpieces(2, 0, 5.0, 5.0).unwrap();

    let file = engine.export_layout();
    let json = file.to_json().unwrap();
    let parsed = LayoutFile::from_json(&json).unwrap();
    assert_eq!(parsed, file);
}

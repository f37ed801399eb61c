use file_format::{export_cut_list, load_design, save_design, LoadError, ProjectMetadata};
use layout_engine::Engine;
use wardrobe_types::{PanelKind, Point};

fn build_design() -> Engine {
    let mut engine = Engine::new();
    engine.add_panel(PanelKind::Divider, 500.0, 1000.0).unwrap();
    engine.add_panel(PanelKind::Shelf, 1000.0, 300.0).unwrap();
    // Drawer against the right wall: one virtual boundary persisted.
    engine.create_drawer(Point::new(700.0, 500.0), 1).unwrap();
    // A stack in the lower-left cell.
    engine.create_drawer(Point::new(300.0, 300.0), 2).unwrap();
    engine
}

// ── Round trip ────────────────────────────────────────────────────────────

#[test]
fn save_load_round_trip() {
    let engine = build_design();
    let metadata = ProjectMetadata::new("Hallway wardrobe");

    let json = save_design(&engine.snapshot(), &engine.history, &metadata);
    let (design, history, loaded_meta) = load_design(&json).unwrap();

    assert_eq!(design, engine.snapshot());
    assert_eq!(loaded_meta.name, "Hallway wardrobe");
    assert_eq!(history.unwrap().len(), engine.history.len());

    let restored = Engine::from_snapshot(&design).unwrap();
    assert_eq!(restored.snapshot(), engine.snapshot());
    assert_eq!(restored.panel_count(), engine.panel_count());
    assert_eq!(restored.drawer_count(), engine.drawer_count());
}

#[test]
fn restored_drawers_recompute_derived_state() {
    let engine = build_design();
    let json = save_design(
        &engine.snapshot(),
        &engine.history,
        &ProjectMetadata::new("x"),
    );
    let (design, _, _) = load_design(&json).unwrap();
    let restored = Engine::from_snapshot(&design).unwrap();

    for drawer in restored.drawers() {
        assert!(drawer.volume.is_some());
        assert!(drawer.box_length.is_some());
        assert!(drawer.parts.is_some());
    }

    // Stack membership survives the round trip.
    let stacked = restored.drawers().filter(|d| d.stack.is_some()).count();
    assert_eq!(stacked, 2);
}

#[test]
fn virtual_boundaries_resolve_against_live_carcass() {
    let mut engine = Engine::new();
    engine.create_drawer(Point::new(500.0, 500.0), 1).unwrap();
    let mut snapshot = engine.snapshot();

    // Widen the carcass in the stored state: the virtual right boundary
    // must follow the new dimensions, not any stored coordinate.
    snapshot.cabinet.width = 1100.0;
    let restored = Engine::from_snapshot(&snapshot).unwrap();
    let volume = restored.drawers().next().unwrap().volume.unwrap();
    assert_eq!(volume.x.end, 1100.0 - 16.0);
}

// ── Validation ────────────────────────────────────────────────────────────

#[test]
fn rejects_unknown_format() {
    let engine = Engine::new();
    let json = save_design(
        &engine.snapshot(),
        &engine.history,
        &ProjectMetadata::new("x"),
    )
    .replace("\"wardrobe\"", "\"bookcase\"");

    assert!(matches!(
        load_design(&json),
        Err(LoadError::UnknownFormat(_))
    ));
}

#[test]
fn rejects_future_version() {
    let engine = Engine::new();
    let json = save_design(
        &engine.snapshot(),
        &engine.history,
        &ProjectMetadata::new("x"),
    )
    .replace("\"version\": 1", "\"version\": 99");

    assert!(matches!(
        load_design(&json),
        Err(LoadError::FutureVersion { .. })
    ));
}

#[test]
fn rejects_garbage() {
    assert!(matches!(
        load_design("not json at all"),
        Err(LoadError::ParseError(_))
    ));
}

// ── Cut list export ───────────────────────────────────────────────────────

#[test]
fn cut_list_contains_fixed_carcass_parts() {
    let engine = Engine::new();
    let cut_list = export_cut_list(&engine);

    let types: Vec<&str> = cut_list.parts.iter().map(|p| p.part_type.as_str()).collect();
    for expected in [
        "left-side",
        "right-side",
        "bottom",
        "top",
        "back-hdf",
        "front-plinth",
        "back-plinth",
    ] {
        assert!(types.contains(&expected), "missing {}", expected);
    }

    let back = cut_list
        .parts
        .iter()
        .find(|p| p.part_type == "back-hdf")
        .unwrap();
    assert_eq!(back.rank, -1);
    assert_eq!(back.thickness, 3.0);
}

#[test]
fn cut_list_includes_user_panels_with_recessed_depth() {
    let mut engine = Engine::new();
    engine.add_panel(PanelKind::Shelf, 1000.0, 500.0).unwrap();
    let cut_list = export_cut_list(&engine);

    let shelf = cut_list
        .parts
        .iter()
        .find(|p| p.part_type == "shelf")
        .unwrap();
    assert_eq!(shelf.rank, 1);
    // inner depth 597 minus one rank
    assert_eq!(shelf.depth, 596.0);
    assert_eq!(shelf.width, 968.0);

    // The 968 mm free span carries one stiffener rib.
    let ribs: Vec<_> = cut_list
        .parts
        .iter()
        .filter(|p| p.part_type == "rib")
        .collect();
    assert_eq!(ribs.len(), 1);
    assert_eq!(ribs[0].width, 968.0);
    assert_eq!(ribs[0].rank, 1);
}

#[test]
fn cut_list_serializes_to_json() {
    let engine = build_design();
    let cut_list = export_cut_list(&engine);
    let json = serde_json::to_string_pretty(&cut_list).unwrap();
    assert!(json.contains("\"version\": \"1.0\""));
    assert!(json.contains("Divider 1"));
}

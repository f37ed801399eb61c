//! Property tests over random operation sequences: the structural
//! invariants must hold after every committed operation, mirroring is an
//! involution, and snapshots round-trip through JSON.

use layout_engine::snapshot::DesignSnapshot;
use layout_engine::Engine;
use proptest::prelude::*;
use wardrobe_types::config::{MIN_GAP, PANEL_THICKNESS};
use wardrobe_types::{BoundaryRef, BoundarySide, PanelId, PanelKind, Point};

#[derive(Debug, Clone)]
enum Op {
    AddShelf { main: i32, cross: i32 },
    AddDivider { main: i32, cross: i32 },
    MovePanel { pick: usize, target: i32 },
    DeletePanel { pick: usize },
    Mirror,
    ResizeRight { coord: i32 },
    ResizeBottom { coord: i32 },
    ResizeTop { coord: i32 },
    CreateDrawer { x: i32, y: i32, count: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..2200i32, 0..1100i32).prop_map(|(main, cross)| Op::AddShelf { main, cross }),
        (0..1100i32, 0..2200i32).prop_map(|(main, cross)| Op::AddDivider { main, cross }),
        (any::<usize>(), 0..2200i32).prop_map(|(pick, target)| Op::MovePanel { pick, target }),
        any::<usize>().prop_map(|pick| Op::DeletePanel { pick }),
        Just(Op::Mirror),
        (300..2000i32).prop_map(|coord| Op::ResizeRight { coord }),
        (0..600i32).prop_map(|coord| Op::ResizeBottom { coord }),
        (1000..2900i32).prop_map(|coord| Op::ResizeTop { coord }),
        (0..1100i32, 0..2200i32, 1..4usize)
            .prop_map(|(x, y, count)| Op::CreateDrawer { x, y, count }),
    ]
}

fn sorted_panel_ids(engine: &Engine) -> Vec<PanelId> {
    let mut ids: Vec<PanelId> = engine.panels().map(|p| p.id.clone()).collect();
    ids.sort();
    ids
}

fn apply(engine: &mut Engine, op: &Op) {
    match op {
        Op::AddShelf { main, cross } => {
            let _ = engine.add_panel(PanelKind::Shelf, *main as f64, *cross as f64);
        }
        Op::AddDivider { main, cross } => {
            let _ = engine.add_panel(PanelKind::Divider, *main as f64, *cross as f64);
        }
        Op::MovePanel { pick, target } => {
            let ids = sorted_panel_ids(engine);
            if let Some(id) = ids.get(pick % ids.len().max(1)) {
                let t = *target as f64;
                let _ = engine.move_panel(id, Point::new(t, t));
            }
        }
        Op::DeletePanel { pick } => {
            let ids = sorted_panel_ids(engine);
            if let Some(id) = ids.get(pick % ids.len().max(1)) {
                let _ = engine.delete_panel(id);
            }
        }
        Op::Mirror => engine.mirror_content(),
        Op::ResizeRight { coord } => engine.resize_side(BoundarySide::Right, *coord as f64),
        Op::ResizeBottom { coord } => engine.resize_side(BoundarySide::Bottom, *coord as f64),
        Op::ResizeTop { coord } => engine.resize_side(BoundarySide::Top, *coord as f64),
        Op::CreateDrawer { x, y, count } => {
            let _ = engine.create_drawer(Point::new(*x as f64, *y as f64), *count);
        }
    }
}

fn check_invariants(engine: &Engine) -> Result<(), String> {
    let cab = engine.cabinet();
    let t = PANEL_THICKNESS;

    for panel in engine.panels() {
        let (low, high) = if panel.is_horizontal() {
            (t, cab.width - t)
        } else {
            (cab.base, cab.height - t)
        };
        if panel.bounds.start < low - 1e-9 || panel.bounds.end > high + 1e-9 {
            return Err(format!("{}: bounds escape the carcass", panel.id));
        }
        if panel.bounds.start >= panel.bounds.end {
            return Err(format!("{}: degenerate bounds", panel.id));
        }

        for linked in [&panel.connections.start, &panel.connections.end]
            .into_iter()
            .flatten()
        {
            let neighbor = engine
                .panel(linked)
                .ok_or_else(|| format!("{}: dangling connection {}", panel.id, linked))?;
            if !neighbor.bounds.contains(panel.position) {
                return Err(format!(
                    "{}: neighbor {} no longer crosses it",
                    panel.id, linked
                ));
            }
        }
    }

    let panels: Vec<_> = engine.panels().collect();
    for (i, a) in panels.iter().enumerate() {
        for b in panels.iter().skip(i + 1) {
            if a.kind == b.kind
                && a.bounds.overlaps(&b.bounds)
                && (a.position - b.position).abs() < MIN_GAP - 1e-9
            {
                return Err(format!("{} and {} violate the minimum gap", a.id, b.id));
            }
        }
    }

    for drawer in engine.drawers() {
        if drawer.volume.is_none() || drawer.parts.is_none() {
            return Err(format!("{}: missing derived geometry", drawer.id));
        }
        for boundary in [
            &drawer.connections.bottom,
            &drawer.connections.top,
            &drawer.connections.left,
            &drawer.connections.right,
        ]
        .into_iter()
        .flatten()
        {
            if let BoundaryRef::Panel(id) = boundary {
                if engine.panel(id).is_none() {
                    return Err(format!("{}: dangling boundary {}", drawer.id, id));
                }
            }
        }
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_after_every_operation(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let mut engine = Engine::new();
        for op in &ops {
            apply(&mut engine, op);
            if let Err(detail) = check_invariants(&engine) {
                prop_assert!(false, "after {:?}: {}", op, detail);
            }
        }
    }

    #[test]
    fn mirror_is_an_involution(
        ops in prop::collection::vec(op_strategy(), 1..25)
    ) {
        let mut engine = Engine::new();
        for op in &ops {
            apply(&mut engine, op);
        }

        let before = engine.snapshot();
        engine.mirror_content();
        engine.mirror_content();
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn snapshots_round_trip_through_json(
        ops in prop::collection::vec(op_strategy(), 1..25)
    ) {
        let mut engine = Engine::new();
        for op in &ops {
            apply(&mut engine, op);
        }

        let snapshot = engine.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: DesignSnapshot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &snapshot);

        let restored = Engine::from_snapshot(&parsed).unwrap();
        prop_assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn widening_a_section_never_shrinks_its_drawer(
        target in 300..900i32
    ) {
        let mut engine = Engine::new();
        let d = engine.add_panel(PanelKind::Divider, 300.0, 1000.0).unwrap();
        engine.create_drawer(Point::new(150.0, 500.0), 1).unwrap();

        let width_of = |engine: &Engine| {
            engine.drawers().next().unwrap().volume.unwrap().x.len()
        };

        let before = width_of(&engine);
        let moving_right = target as f64 > 300.0;
        engine.move_panel(&d, Point::new(target as f64, 0.0)).unwrap();
        let after = width_of(&engine);

        if moving_right {
            prop_assert!(after >= before - 1e-9);
        } else {
            prop_assert!(after <= before + 1e-9);
        }
    }
}

//! Invariant assertions with diagnostic output.
//!
//! Every failure names the offending entity and the values involved, so a
//! broken scenario reads without re-running under a debugger.

use layout_engine::Engine;
use wardrobe_types::config::{MIN_GAP, PANEL_THICKNESS};
use wardrobe_types::BoundaryRef;

use crate::helpers::HarnessError;

fn fail(detail: String) -> Result<(), HarnessError> {
    Err(HarnessError::AssertionFailed { detail })
}

/// Every shelf lies within the carcass interior horizontally; every divider
/// lies between base and ceiling; all bounds are non-degenerate.
pub fn assert_bounds_containment(engine: &Engine) -> Result<(), HarnessError> {
    let cab = engine.cabinet();
    let t = PANEL_THICKNESS;
    for panel in engine.panels() {
        let (low, high) = if panel.is_horizontal() {
            (t, cab.width - t)
        } else {
            (cab.base, cab.height - t)
        };
        if panel.bounds.start < low - 1e-9
            || panel.bounds.end > high + 1e-9
            || panel.bounds.start >= panel.bounds.end
        {
            return fail(format!(
                "{}: bounds {:?} outside [{}, {}]",
                panel.id, panel.bounds, low, high
            ));
        }
    }
    Ok(())
}

/// Every panel connection and every real drawer boundary names a panel that
/// still exists.
pub fn assert_no_dangling_references(engine: &Engine) -> Result<(), HarnessError> {
    for panel in engine.panels() {
        for linked in [&panel.connections.start, &panel.connections.end]
            .into_iter()
            .flatten()
        {
            if engine.panel(linked).is_none() {
                return fail(format!(
                    "{}: connection references deleted panel {}",
                    panel.id, linked
                ));
            }
        }
    }
    for drawer in engine.drawers() {
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
                    return fail(format!(
                        "{}: boundary references deleted panel {}",
                        drawer.id, id
                    ));
                }
            }
        }
    }
    Ok(())
}

/// A panel's connections actually bracket it: the named neighbor crosses the
/// panel's position and its face coincides with the panel's bound.
pub fn assert_connection_symmetry(engine: &Engine) -> Result<(), HarnessError> {
    let t = PANEL_THICKNESS;
    for panel in engine.panels() {
        if let Some(start_id) = &panel.connections.start {
            let neighbor = engine.panel(start_id).expect("checked by no-dangling");
            if !neighbor.bounds.contains(panel.position) {
                return fail(format!(
                    "{}: start neighbor {} does not cross it",
                    panel.id, start_id
                ));
            }
            if (neighbor.position + t - panel.bounds.start).abs() > 1e-9 {
                return fail(format!(
                    "{}: bounds.start {} not on face of {}",
                    panel.id, panel.bounds.start, start_id
                ));
            }
        }
        if let Some(end_id) = &panel.connections.end {
            let neighbor = engine.panel(end_id).expect("checked by no-dangling");
            if !neighbor.bounds.contains(panel.position) {
                return fail(format!(
                    "{}: end neighbor {} does not cross it",
                    panel.id, end_id
                ));
            }
            if (neighbor.position - panel.bounds.end).abs() > 1e-9 {
                return fail(format!(
                    "{}: bounds.end {} not on face of {}",
                    panel.id, panel.bounds.end, end_id
                ));
            }
        }
    }
    Ok(())
}

/// No two same-kind panels with overlapping cross spans sit closer than the
/// minimum gap.
pub fn assert_min_gap(engine: &Engine) -> Result<(), HarnessError> {
    let panels: Vec<_> = engine.panels().collect();
    for (i, a) in panels.iter().enumerate() {
        for b in panels.iter().skip(i + 1) {
            if a.kind != b.kind || !a.bounds.overlaps(&b.bounds) {
                continue;
            }
            let distance = (a.position - b.position).abs();
            if distance < MIN_GAP - 1e-9 {
                return fail(format!(
                    "{} and {} are {} mm apart (minimum {})",
                    a.id, b.id, distance, MIN_GAP
                ));
            }
        }
    }
    Ok(())
}

/// Every drawer has a complete set of connections and derived geometry, and
/// its parts sit inside its volume.
pub fn assert_drawers_complete(engine: &Engine) -> Result<(), HarnessError> {
    for drawer in engine.drawers() {
        if drawer.boundary_refs().is_none() {
            return fail(format!("{}: missing boundary connection", drawer.id));
        }
        let (Some(volume), Some(_), Some(parts)) =
            (&drawer.volume, &drawer.box_length, &drawer.parts)
        else {
            return fail(format!("{}: derived geometry not computed", drawer.id));
        };

        let parts: &drawer_ops::DrawerParts = parts;
        for (name, part) in [
            ("front", &parts.front),
            ("left side", &parts.left_side),
            ("right side", &parts.right_side),
            ("back", &parts.back),
            ("bottom", &parts.bottom),
        ] {
            let half_w = part.width / 2.0;
            let half_h = part.height / 2.0;
            if part.position.x - half_w < volume.x.start - 1e-9
                || part.position.x + half_w > volume.x.end + 1e-9
                || part.position.y - half_h < volume.y.start - 1e-9
                || part.position.y + half_h > volume.y.end + 1e-9
            {
                return fail(format!(
                    "{}: {} panel sticks out of the drawer volume",
                    drawer.id, name
                ));
            }
        }
    }
    Ok(())
}

/// Run every structural invariant.
pub fn assert_all_invariants(engine: &Engine) -> Result<(), HarnessError> {
    assert_bounds_containment(engine)?;
    assert_no_dangling_references(engine)?;
    assert_connection_symmetry(engine)?;
    assert_min_gap(engine)?;
    assert_drawers_complete(engine)?;
    Ok(())
}

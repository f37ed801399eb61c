//! Deletion with cascading and re-anchoring.

use std::collections::HashSet;

use tracing::{debug, warn};
use wardrobe_types::config::PANEL_THICKNESS;
use wardrobe_types::{BoundaryRef, DrawerId, PanelId};

use crate::types::EngineError;
use crate::Engine;

impl Engine {
    /// Delete a panel together with every panel that transitively depends
    /// on it (a divider standing on a deleted shelf, a shelf ending on a
    /// deleted divider, and so on). Surviving panels that referenced a
    /// deleted neighbor are re-anchored to whatever brackets them now.
    /// Drawers bounded by any deleted panel are removed; the rest recompute.
    pub fn delete_panel(&mut self, id: &PanelId) -> Result<(), EngineError> {
        if !self.panels.contains_key(id) {
            return Err(EngineError::PanelNotFound { id: id.clone() });
        }

        // Walk the depends-on relation: a panel depends on the neighbors its
        // connections name, so dependents of X are panels connected to X.
        let mut to_delete: HashSet<PanelId> = HashSet::new();
        to_delete.insert(id.clone());
        let mut frontier = vec![id.clone()];
        while let Some(current) = frontier.pop() {
            let current_kind = self.panels[&current].kind;
            for other in self.panels.values() {
                if other.kind == current_kind || to_delete.contains(&other.id) {
                    continue;
                }
                let depends = other.connections.start.as_ref() == Some(&current)
                    || other.connections.end.as_ref() == Some(&current);
                if depends {
                    to_delete.insert(other.id.clone());
                    frontier.push(other.id.clone());
                }
            }
        }

        let affected: Vec<PanelId> = self
            .panels
            .values()
            .filter(|p| !to_delete.contains(&p.id))
            .filter(|p| {
                let gone = |c: &Option<PanelId>| {
                    c.as_ref().map_or(false, |linked| to_delete.contains(linked))
                };
                gone(&p.connections.start) || gone(&p.connections.end)
            })
            .map(|p| p.id.clone())
            .collect();

        debug!(root = %id, cascade = to_delete.len(), "deleting panel");
        for deleted in &to_delete {
            self.panels.remove(deleted);
        }
        for survivor in &affected {
            self.recalculate_panel_bounds(survivor);
        }
        self.refresh_all_ribs();

        let mut dead = Vec::new();
        let mut live = Vec::new();
        for drawer in self.drawers.values() {
            let bounded_by_deleted = [
                &drawer.connections.bottom,
                &drawer.connections.top,
                &drawer.connections.left,
                &drawer.connections.right,
            ]
            .into_iter()
            .any(|c| matches!(c, Some(BoundaryRef::Panel(p)) if to_delete.contains(p)));
            if bounded_by_deleted {
                dead.push(drawer.id.clone());
            } else {
                live.push(drawer.id.clone());
            }
        }
        for drawer_id in dead {
            self.drawers.remove(&drawer_id);
        }
        for drawer_id in live {
            if let Err(error) = self.refresh_drawer(&drawer_id) {
                warn!(drawer = %drawer_id, %error, "drawer update failed after delete");
            }
        }

        self.commit();
        Ok(())
    }

    /// Delete a drawer. All slots of a stack share one physical section, so
    /// deleting any of them removes the whole stack.
    pub fn delete_drawer(&mut self, id: &DrawerId) -> Result<(), EngineError> {
        let drawer = self
            .drawers
            .get(id)
            .ok_or_else(|| EngineError::DrawerNotFound { id: id.clone() })?;

        match drawer.stack {
            Some(slot) => {
                let stack_members: Vec<DrawerId> = self
                    .drawers
                    .values()
                    .filter(|d| d.stack.map(|s| s.id) == Some(slot.id))
                    .map(|d| d.id.clone())
                    .collect();
                for member in stack_members {
                    self.drawers.remove(&member);
                }
            }
            None => {
                self.drawers.remove(id);
            }
        }

        self.commit();
        Ok(())
    }

    /// Rebuild a panel's bounds and connections from whatever brackets its
    /// previous center now: the bracketing point list is rebuilt from all
    /// current crossing panels, falling back to the carcass edges.
    pub(crate) fn recalculate_panel_bounds(&mut self, id: &PanelId) {
        let Some(panel) = self.panels.get(id).cloned() else {
            return;
        };
        let t = PANEL_THICKNESS;

        let (low_edge, high_edge) = if panel.is_horizontal() {
            (t, self.cabinet.width - t)
        } else {
            (self.cabinet.base, self.cabinet.height - t)
        };

        let mut crossing: Vec<(f64, PanelId)> = self
            .panels
            .values()
            .filter(|p| p.kind != panel.kind && p.bounds.contains(panel.position))
            .map(|p| (p.position, p.id.clone()))
            .collect();
        crossing.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut points: Vec<(f64, Option<PanelId>)> = Vec::with_capacity(crossing.len() + 2);
        points.push((low_edge, None));
        points.extend(crossing.into_iter().map(|(pos, pid)| (pos, Some(pid))));
        points.push((high_edge, None));

        let center = panel.bounds.mid();
        for pair in points.windows(2) {
            let (pos_a, ref panel_a) = pair[0];
            let (pos_b, ref panel_b) = pair[1];
            if center >= pos_a && center <= pos_b {
                let updated = self.panels.get_mut(id).expect("panel cloned above");
                updated.bounds.start = pos_a + if panel_a.is_some() { t } else { 0.0 };
                updated.bounds.end = pos_b;
                updated.connections.start = panel_a.clone();
                updated.connections.end = panel_b.clone();
                if panel.is_horizontal() {
                    self.refresh_ribs(id);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wardrobe_types::{PanelKind, Span};

    use crate::Engine;

    #[test]
    fn survivor_reanchors_to_carcass_when_neighbor_vanishes() {
        let mut engine = Engine::new();
        let d = engine.add_panel(PanelKind::Divider, 500.0, 1000.0).unwrap();
        let s = engine.add_panel(PanelKind::Shelf, 1000.0, 300.0).unwrap();
        assert_eq!(engine.panels[&s].bounds, Span::new(16.0, 500.0));

        // A survivor whose neighbor vanished re-anchors to the next bracket,
        // here the carcass edges.
        engine.panels.remove(&d);
        engine.recalculate_panel_bounds(&s);

        let shelf = &engine.panels[&s];
        assert_eq!(shelf.bounds, Span::new(16.0, 984.0));
        assert!(shelf.connections.start.is_none());
        assert!(shelf.connections.end.is_none());
    }

    #[test]
    fn survivor_reanchors_to_remaining_divider() {
        let mut engine = Engine::new();
        let keep = engine.add_panel(PanelKind::Divider, 700.0, 1000.0).unwrap();
        let gone = engine.add_panel(PanelKind::Divider, 300.0, 1000.0).unwrap();
        let s = engine.add_panel(PanelKind::Shelf, 1000.0, 500.0).unwrap();
        assert_eq!(engine.panels[&s].bounds, Span::new(316.0, 700.0));

        engine.panels.remove(&gone);
        engine.recalculate_panel_bounds(&s);

        let shelf = &engine.panels[&s];
        assert_eq!(shelf.bounds, Span::new(16.0, 700.0));
        assert!(shelf.connections.start.is_none());
        assert_eq!(shelf.connections.end.as_ref(), Some(&keep));
    }
}

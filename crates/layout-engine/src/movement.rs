//! Moving panels and resizing the carcass.

use tracing::warn;
use wardrobe_types::config::{
    MAX_CABINET_HEIGHT, MAX_CABINET_WIDTH, MIN_BASE_HEIGHT, MIN_CABINET_WIDTH, MIN_GAP,
    MIN_SECTION, PANEL_THICKNESS,
};
use wardrobe_types::{BoundarySide, DrawerId, PanelId, PanelKind, Point};

use crate::types::EngineError;
use crate::Engine;

impl Engine {
    /// Move a panel toward `target`, clamped so that the carcass interior,
    /// the minimum gap to overlapping same-type panels, and every bounded
    /// drawer's size range all stay satisfied. The final position is rounded
    /// to whole millimetres, then propagated to everything connected.
    pub fn move_panel(&mut self, id: &PanelId, target: Point) -> Result<(), EngineError> {
        let panel = self
            .panels
            .get(id)
            .ok_or_else(|| EngineError::PanelNotFound { id: id.clone() })?;
        let kind = panel.kind;
        let span = panel.bounds;
        let current = panel.position;
        let t = PANEL_THICKNESS;

        let requested = match kind {
            PanelKind::Shelf => target.y,
            PanelKind::Divider => target.x,
        };

        let (mut min, mut max) = match kind {
            PanelKind::Shelf => (
                self.cabinet.base + MIN_GAP,
                self.cabinet.height - t - MIN_GAP,
            ),
            PanelKind::Divider => (t + MIN_GAP, self.cabinet.width - t - MIN_GAP),
        };

        // Same-type panels whose cross-axis spans overlap keep their gap.
        for other in self.panels.values() {
            if other.id == *id || other.kind != kind {
                continue;
            }
            if other.bounds.overlaps(&span) {
                if other.position < current {
                    min = min.max(other.position + MIN_GAP);
                }
                if other.position > current {
                    max = max.min(other.position - MIN_GAP);
                }
            }
        }

        let drawer_limits = self.drawer_limits_for_panel(id);
        min = min.max(drawer_limits.min);
        max = max.min(drawer_limits.max);

        // Conflicting constraints leave the panel where it is.
        let new_pos = if min <= max {
            requested.min(max).max(min).round()
        } else {
            current
        };
        self.panels
            .get_mut(id)
            .expect("panel looked up above")
            .position = new_pos;

        self.update_connected_panels(id);
        self.commit();
        Ok(())
    }

    /// Resize the carcass by dragging one of its sides to `coord` (the
    /// dragged face's center coordinate). Clamped against the carcass size
    /// range, the nearest panel, and drawer limits; a clamp to the current
    /// size is a no-op.
    pub fn resize_side(&mut self, side: BoundarySide, coord: f64) {
        match side {
            BoundarySide::Left | BoundarySide::Right => self.resize_width(side, coord),
            BoundarySide::Bottom => self.resize_base(coord),
            BoundarySide::Top => self.resize_height(coord),
        }
    }

    // ── Propagation ───────────────────────────────────────────────────────

    /// Snap the bounds of every panel whose connection is the moved panel,
    /// refresh the ribs of affected shelves, and recompute every drawer the
    /// moved panel bounds.
    pub(crate) fn update_connected_panels(&mut self, moved_id: &PanelId) {
        let Some(moved) = self.panels.get(moved_id).cloned() else {
            return;
        };
        let t = PANEL_THICKNESS;

        if moved.is_horizontal() {
            // Dividers resting on or under the shelf follow it.
            for divider_id in self.panel_ids_of_kind(PanelKind::Divider) {
                let divider = self.panels.get_mut(&divider_id).expect("id just listed");
                if divider.connections.start.as_ref() == Some(moved_id) {
                    divider.bounds.start = moved.position + t;
                }
                if divider.connections.end.as_ref() == Some(moved_id) {
                    divider.bounds.end = moved.position;
                }
            }
            self.refresh_ribs(moved_id);
        } else {
            // Shelves terminating on the divider follow it; shelves it merely
            // passes through still get their ribs recomputed.
            let mut affected = Vec::new();
            for shelf_id in self.panel_ids_of_kind(PanelKind::Shelf) {
                let shelf = self.panels.get_mut(&shelf_id).expect("id just listed");
                let mut touched = false;
                if shelf.connections.start.as_ref() == Some(moved_id) {
                    shelf.bounds.start = moved.position + t;
                    touched = true;
                }
                if shelf.connections.end.as_ref() == Some(moved_id) {
                    shelf.bounds.end = moved.position;
                    touched = true;
                }
                if shelf.bounds.contains(moved.position) && moved.bounds.contains(shelf.position)
                {
                    touched = true;
                }
                if touched {
                    affected.push(shelf_id);
                }
            }
            for shelf_id in affected {
                self.refresh_ribs(&shelf_id);
            }
        }

        let touching: Vec<DrawerId> = self
            .drawers
            .values()
            .filter(|d| d.touches_panel(moved_id))
            .map(|d| d.id.clone())
            .collect();
        for drawer_id in touching {
            if let Err(error) = self.refresh_drawer(&drawer_id) {
                warn!(drawer = %drawer_id, %error, "drawer update failed after panel move");
            }
        }
    }

    // ── Carcass resizes ───────────────────────────────────────────────────

    fn resize_width(&mut self, side: BoundarySide, coord: f64) {
        let t = PANEL_THICKNESS;
        let width = self.cabinet.width;

        let mut leftmost_divider: Option<f64> = None;
        let mut rightmost_divider: Option<f64> = None;
        for panel in self.panels.values() {
            if panel.is_horizontal() {
                continue;
            }
            leftmost_divider = Some(leftmost_divider.map_or(panel.position, |v| v.min(panel.position)));
            rightmost_divider = Some(rightmost_divider.map_or(panel.position, |v| v.max(panel.position)));
        }

        if side == BoundarySide::Left {
            let min_x = width - MAX_CABINET_WIDTH + t / 2.0;
            let max_x = match leftmost_divider {
                Some(leftmost) => leftmost - MIN_GAP - t / 2.0,
                None => width - MIN_CABINET_WIDTH + t / 2.0,
            };
            let limits = self.drawer_limits_for_side(BoundarySide::Left);
            let min_x = min_x.max(limits.min - t / 2.0);
            let max_x = max_x.min(limits.max - t / 2.0);
            if min_x > max_x {
                return;
            }

            let new_x = coord.min(max_x).max(min_x).round();
            let shift = t / 2.0 - new_x;
            if shift == 0.0 {
                return;
            }

            // The coordinate origin is the left side: widen/narrow, then
            // shift everything right to compensate.
            self.cabinet.width = width + shift;
            let new_width = self.cabinet.width;
            for panel in self.panels.values_mut() {
                if panel.is_horizontal() {
                    panel.bounds.start = (panel.bounds.start + shift).max(t);
                    panel.bounds.end = (panel.bounds.end + shift).min(new_width - t);
                } else {
                    panel.position += shift;
                }
            }
        } else {
            let max_x = MAX_CABINET_WIDTH - t / 2.0;
            let min_x = match rightmost_divider {
                Some(rightmost) => rightmost + MIN_GAP + t / 2.0,
                None => MIN_CABINET_WIDTH - t / 2.0,
            };
            let limits = self.drawer_limits_for_side(BoundarySide::Right);
            let min_x = min_x.max(limits.min + t / 2.0);
            let max_x = max_x.min(limits.max + t / 2.0);
            if min_x > max_x {
                return;
            }

            let new_x = coord.min(max_x).max(min_x).round();
            let new_width = new_x + t / 2.0;
            if new_width == width {
                return;
            }
            self.cabinet.width = new_width;
        }

        // Shelves running to the carcass follow the new edges.
        let new_width = self.cabinet.width;
        for panel in self.panels.values_mut() {
            if panel.is_horizontal() {
                if panel.connections.start.is_none() {
                    panel.bounds.start = t;
                }
                if panel.connections.end.is_none() {
                    panel.bounds.end = new_width - t;
                }
            }
        }

        self.refresh_all_ribs();
        self.refresh_all_drawers();
        self.commit();
    }

    /// The bottom boundary adjusts the plinth height. Dividers anchored to
    /// the carcass floor stretch or shrink from below; shelves keep their
    /// absolute heights.
    fn resize_base(&mut self, coord: f64) {
        let t = PANEL_THICKNESS;
        let mut min_base = MIN_BASE_HEIGHT;
        let mut max_base = self.cabinet.height - t - MIN_SECTION;

        for panel in self.panels.values() {
            if panel.is_horizontal() {
                max_base = max_base.min(panel.position - MIN_GAP - t);
            }
        }
        let limits = self.drawer_limits_for_side(BoundarySide::Bottom);
        min_base = min_base.max(limits.min);
        max_base = max_base.min(limits.max);
        if min_base > max_base {
            return;
        }

        let requested = coord + t / 2.0;
        let new_base = requested.min(max_base).max(min_base).round();
        if new_base == self.cabinet.base {
            return;
        }
        self.cabinet.base = new_base;

        for panel in self.panels.values_mut() {
            if !panel.is_horizontal() && panel.connections.start.is_none() {
                panel.bounds.start = new_base;
            }
        }

        self.refresh_all_ribs();
        self.refresh_all_drawers();
        self.commit();
    }

    /// The top boundary adjusts the overall height. Dividers with no shelf
    /// above stretch to the new ceiling.
    fn resize_height(&mut self, coord: f64) {
        let t = PANEL_THICKNESS;
        let mut min_height = self.cabinet.base + MIN_SECTION + t;
        let mut max_height = MAX_CABINET_HEIGHT;

        for panel in self.panels.values() {
            if panel.is_horizontal() {
                min_height = min_height.max(panel.position + t + MIN_GAP);
            }
        }
        let limits = self.drawer_limits_for_side(BoundarySide::Top);
        min_height = min_height.max(limits.min + t);
        max_height = max_height.min(limits.max + t);
        if min_height > max_height {
            return;
        }

        let requested = coord + t / 2.0;
        let new_height = requested.min(max_height).max(min_height).round();
        if new_height == self.cabinet.height {
            return;
        }
        self.cabinet.height = new_height;

        for panel in self.panels.values_mut() {
            if !panel.is_horizontal() && panel.connections.end.is_none() {
                panel.bounds.end = new_height - t;
            }
        }

        self.refresh_all_ribs();
        self.refresh_all_drawers();
        self.commit();
    }
}

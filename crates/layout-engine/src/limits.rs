//! Drawer-derived movement limits.
//!
//! A panel (or the carcass itself) that bounds a drawer section may not move
//! so far that any drawer in the section falls outside its allowed size
//! range. Stacks multiply the height limits by their slot count; width is
//! shared by all slots and stays per-drawer. Height is limited from below
//! only: an over-tall section is legal, the drawer caps its height and sits
//! at the bottom. Width is limited in both directions, since an over-wide
//! section has no such fallback.

use std::collections::HashSet;

use wardrobe_types::config::{
    MAX_DRAWER_WIDTH, MIN_DRAWER_HEIGHT, MIN_DRAWER_WIDTH, PANEL_THICKNESS,
};
use wardrobe_types::{BoundaryRef, BoundarySide, PanelId};

use crate::types::Drawer;
use crate::Engine;

/// An open movement interval; starts unbounded and only tightens.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    fn raise_min(&mut self, value: f64) {
        self.min = self.min.max(value);
    }

    fn lower_max(&mut self, value: f64) {
        self.max = self.max.min(value);
    }
}

impl Engine {
    /// One representative drawer per stack (all slots share the section),
    /// plus every single drawer, each with its slot count.
    fn drawer_groups(&self) -> Vec<(&Drawer, usize)> {
        let mut seen_stacks = HashSet::new();
        let mut groups = Vec::new();
        for drawer in self.drawers.values() {
            match drawer.stack {
                Some(slot) => {
                    if seen_stacks.insert(slot.id) {
                        groups.push((drawer, slot.count));
                    }
                }
                None => groups.push((drawer, 1)),
            }
        }
        groups
    }

    /// Limits on a panel's main-axis position imposed by the drawers it
    /// bounds, in position (lower-face) space.
    pub(crate) fn drawer_limits_for_panel(&self, id: &PanelId) -> Limits {
        let t = PANEL_THICKNESS;
        let mut limits = Limits::unbounded();

        for (drawer, count) in self.drawer_groups() {
            let n = count as f64;
            let conn = &drawer.connections;
            let is = |c: &Option<BoundaryRef>| {
                matches!(c, Some(BoundaryRef::Panel(p)) if p == id)
            };

            if is(&conn.bottom) {
                if let Some(top_edge) = self.edge_of(&conn.top, BoundarySide::Top) {
                    // Cell bottom is position + thickness.
                    limits.lower_max(top_edge - n * MIN_DRAWER_HEIGHT - t);
                }
            }
            if is(&conn.top) {
                if let Some(bottom_edge) = self.edge_of(&conn.bottom, BoundarySide::Bottom) {
                    limits.raise_min(bottom_edge + n * MIN_DRAWER_HEIGHT);
                }
            }
            if is(&conn.left) {
                if let Some(right_edge) = self.edge_of(&conn.right, BoundarySide::Right) {
                    limits.lower_max(right_edge - MIN_DRAWER_WIDTH - t);
                    limits.raise_min(right_edge - MAX_DRAWER_WIDTH - t);
                }
            }
            if is(&conn.right) {
                if let Some(left_edge) = self.edge_of(&conn.left, BoundarySide::Left) {
                    limits.raise_min(left_edge + MIN_DRAWER_WIDTH);
                    limits.lower_max(left_edge + MAX_DRAWER_WIDTH);
                }
            }
        }

        limits
    }

    /// Limits on a carcass boundary's inner-edge coordinate imposed by
    /// drawers that touch that boundary directly. This is how a drawer in a
    /// wall-adjacent section constrains the carcass itself.
    pub(crate) fn drawer_limits_for_side(&self, side: BoundarySide) -> Limits {
        let mut limits = Limits::unbounded();

        for (drawer, count) in self.drawer_groups() {
            let n = count as f64;
            let conn = &drawer.connections;
            let is = |c: &Option<BoundaryRef>| {
                matches!(c, Some(BoundaryRef::Side(s)) if *s == side)
            };

            match side {
                BoundarySide::Bottom if is(&conn.bottom) => {
                    if let Some(top_edge) = self.edge_of(&conn.top, BoundarySide::Top) {
                        limits.lower_max(top_edge - n * MIN_DRAWER_HEIGHT);
                    }
                }
                BoundarySide::Top if is(&conn.top) => {
                    if let Some(bottom_edge) = self.edge_of(&conn.bottom, BoundarySide::Bottom) {
                        limits.raise_min(bottom_edge + n * MIN_DRAWER_HEIGHT);
                    }
                }
                BoundarySide::Left if is(&conn.left) => {
                    if let Some(right_edge) = self.edge_of(&conn.right, BoundarySide::Right) {
                        limits.lower_max(right_edge - MIN_DRAWER_WIDTH);
                        limits.raise_min(right_edge - MAX_DRAWER_WIDTH);
                    }
                }
                BoundarySide::Right if is(&conn.right) => {
                    if let Some(left_edge) = self.edge_of(&conn.left, BoundarySide::Left) {
                        limits.raise_min(left_edge + MIN_DRAWER_WIDTH);
                        limits.lower_max(left_edge + MAX_DRAWER_WIDTH);
                    }
                }
                _ => {}
            }
        }

        limits
    }

    fn edge_of(&self, boundary: &Option<BoundaryRef>, role: BoundarySide) -> Option<f64> {
        boundary
            .as_ref()
            .and_then(|b| self.boundary_edge(b, role).ok())
    }
}

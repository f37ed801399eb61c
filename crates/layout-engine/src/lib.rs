//! Constraint-propagation layout engine for a rectangular cabinet carcass.
//!
//! The engine owns the carcass dimensions and the panel/drawer arenas and is
//! the single mutator of both. Panels reference their neighbors by stable
//! string ID through the arena, never by live pointer, so cascading deletes
//! can never leave a dangling reference behind. Rendering and persistence
//! collaborators read the mutated state back through the accessors and the
//! snapshot adapter; the engine itself performs no I/O.

pub mod add;
pub mod cells;
pub mod delete;
pub mod drawers;
pub mod history;
pub mod limits;
pub mod mirror;
pub mod movement;
pub mod rank;
pub mod ribs;
pub mod snapshot;
pub mod types;

use std::collections::HashMap;

use wardrobe_types::config::{
    DEFAULT_BASE, DEFAULT_DEPTH, DEFAULT_HEIGHT, DEFAULT_WIDTH, PANEL_THICKNESS,
};
use wardrobe_types::{BoundaryRef, BoundarySide, DrawerId, PanelId, PanelKind};

use crate::history::History;
use crate::types::{Carcass, Drawer, EngineError, Panel};

/// The cabinet layout engine: carcass, panel arena, drawer arena, history.
pub struct Engine {
    pub(crate) cabinet: Carcass,
    pub(crate) panels: HashMap<PanelId, Panel>,
    pub(crate) drawers: HashMap<DrawerId, Drawer>,
    pub(crate) next_panel_id: u64,
    pub(crate) next_drawer_id: u64,
    pub(crate) next_stack_id: u64,
    /// Undo/redo snapshots; one entry per committed operation.
    pub history: History,
}

impl Engine {
    /// Create an engine with the default carcass and a baseline snapshot.
    pub fn new() -> Self {
        Self::with_carcass(Carcass {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            depth: DEFAULT_DEPTH,
            base: DEFAULT_BASE,
        })
    }

    pub fn with_carcass(cabinet: Carcass) -> Self {
        let mut engine = Self {
            cabinet,
            panels: HashMap::new(),
            drawers: HashMap::new(),
            next_panel_id: 0,
            next_drawer_id: 0,
            next_stack_id: 0,
            history: History::new(),
        };
        let baseline = engine.snapshot();
        engine.history.push(baseline);
        engine
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn cabinet(&self) -> Carcass {
        self.cabinet
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn drawer(&self, id: &DrawerId) -> Option<&Drawer> {
        self.drawers.get(id)
    }

    pub fn drawers(&self) -> impl Iterator<Item = &Drawer> {
        self.drawers.values()
    }

    pub fn drawer_count(&self) -> usize {
        self.drawers.len()
    }

    // ── Whole-cabinet operations ──────────────────────────────────────────

    /// Remove every panel and drawer. No-op on an already empty cabinet.
    pub fn clear_all(&mut self) {
        if self.panels.is_empty() && self.drawers.is_empty() {
            return;
        }
        self.panels.clear();
        self.drawers.clear();
        self.commit();
    }

    /// Set a drawer's open/closed presentation flag. Not a geometry change,
    /// so no history snapshot is produced.
    pub fn set_drawer_open(&mut self, id: &DrawerId, open: bool) -> Result<(), EngineError> {
        let drawer = self
            .drawers
            .get_mut(id)
            .ok_or_else(|| EngineError::DrawerNotFound { id: id.clone() })?;
        drawer.is_open = open;
        Ok(())
    }

    // ── History ───────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> Result<(), EngineError> {
        let snapshot = self
            .history
            .step_back()
            .cloned()
            .ok_or(EngineError::NothingToUndo)?;
        self.restore(&snapshot)
    }

    pub fn redo(&mut self) -> Result<(), EngineError> {
        let snapshot = self
            .history
            .step_forward()
            .cloned()
            .ok_or(EngineError::NothingToRedo)?;
        self.restore(&snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Record the current state as a committed operation boundary.
    pub(crate) fn commit(&mut self) {
        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    // ── Shared resolution helpers ─────────────────────────────────────────

    /// Resolve a section boundary to the inner cell-edge coordinate it
    /// contributes, given which side of the section it sits on. Virtual
    /// boundaries read the live carcass; real panels offset by their
    /// thickness on the near side.
    pub(crate) fn boundary_edge(
        &self,
        boundary: &BoundaryRef,
        role: BoundarySide,
    ) -> Result<f64, EngineError> {
        match boundary {
            BoundaryRef::Side(side) => Ok(self.cabinet.inner_edge(*side)),
            BoundaryRef::Panel(id) => {
                let panel = self
                    .panels
                    .get(id)
                    .ok_or_else(|| EngineError::UnknownReference { id: id.clone() })?;
                Ok(match role {
                    BoundarySide::Bottom | BoundarySide::Left => {
                        panel.position + PANEL_THICKNESS
                    }
                    BoundarySide::Top | BoundarySide::Right => panel.position,
                })
            }
        }
    }

    pub(crate) fn panel_ids_of_kind(&self, kind: PanelKind) -> Vec<PanelId> {
        self.panels
            .values()
            .filter(|p| p.kind == kind)
            .map(|p| p.id.clone())
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

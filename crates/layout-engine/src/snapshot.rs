//! The serialization adapter: an ID-based, connection-resolved deep copy of
//! the whole design.
//!
//! Live entities reference neighbors through the arena, so converting to a
//! snapshot only flattens the arena into sorted records; converting back is
//! two-pass, because connections form a graph with forward references:
//! every panel is created first, then every reference is checked against the
//! finished arena. Virtual drawer boundaries are stored as tagged records
//! and always resolve against the carcass that is live at restore time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;
use wardrobe_types::{BoundaryRef, BoundarySide, DrawerId, PanelId, PanelKind, Span};

use crate::types::{
    Carcass, Drawer, DrawerConnections, EngineError, Panel, PanelConnections, StackSlot,
};
use crate::Engine;

/// Complete persisted design state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    pub cabinet: Carcass,
    pub panels: Vec<PanelRecord>,
    pub drawers: Vec<DrawerRecord>,
    pub next_panel_id: u64,
    pub next_drawer_id: u64,
    pub next_stack_id: u64,
}

/// One persisted panel. The tag keeps the connection keys axis-specific.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PanelRecord {
    Shelf {
        id: PanelId,
        position: f64,
        bounds: Span,
        connections: ShelfLinks,
    },
    Divider {
        id: PanelId,
        position: f64,
        bounds: Span,
        connections: DividerLinks,
    },
}

impl PanelRecord {
    pub fn id(&self) -> &PanelId {
        match self {
            PanelRecord::Shelf { id, .. } | PanelRecord::Divider { id, .. } => id,
        }
    }

    fn links(&self) -> (&Option<PanelId>, &Option<PanelId>) {
        match self {
            PanelRecord::Shelf { connections, .. } => (&connections.left, &connections.right),
            PanelRecord::Divider { connections, .. } => (&connections.bottom, &connections.top),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLinks {
    pub left: Option<PanelId>,
    pub right: Option<PanelId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerLinks {
    pub bottom: Option<PanelId>,
    pub top: Option<PanelId>,
}

/// One persisted drawer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawerRecord {
    Drawer {
        id: DrawerId,
        connections: DrawerLinks,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stack: Option<StackSlot>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerLinks {
    pub bottom_shelf: Option<BoundaryRecord>,
    pub top_shelf: Option<BoundaryRecord>,
    pub left_divider: Option<BoundaryRecord>,
    pub right_divider: Option<BoundaryRecord>,
}

/// A persisted section boundary: a real panel by ID, or a virtual carcass
/// boundary by side. Virtual records store no coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundaryRecord {
    Virtual {
        #[serde(rename = "virtual")]
        is_virtual: bool,
        #[serde(rename = "type")]
        side: BoundarySide,
    },
    Real {
        #[serde(rename = "virtual")]
        is_virtual: bool,
        id: PanelId,
    },
}

impl From<&BoundaryRef> for BoundaryRecord {
    fn from(boundary: &BoundaryRef) -> Self {
        match boundary {
            BoundaryRef::Side(side) => BoundaryRecord::Virtual {
                is_virtual: true,
                side: *side,
            },
            BoundaryRef::Panel(id) => BoundaryRecord::Real {
                is_virtual: false,
                id: id.clone(),
            },
        }
    }
}

impl BoundaryRecord {
    fn to_boundary(&self) -> BoundaryRef {
        match self {
            BoundaryRecord::Virtual { side, .. } => BoundaryRef::Side(*side),
            BoundaryRecord::Real { id, .. } => BoundaryRef::Panel(id.clone()),
        }
    }

    fn panel_id(&self) -> Option<&PanelId> {
        match self {
            BoundaryRecord::Real { id, .. } => Some(id),
            BoundaryRecord::Virtual { .. } => None,
        }
    }
}

impl Engine {
    /// Flatten the current state into an ID-based snapshot. Record order is
    /// deterministic (sorted by ID).
    pub fn snapshot(&self) -> DesignSnapshot {
        let mut panels: Vec<&Panel> = self.panels.values().collect();
        panels.sort_by(|a, b| a.id.cmp(&b.id));
        let panels = panels
            .into_iter()
            .map(|p| match p.kind {
                PanelKind::Shelf => PanelRecord::Shelf {
                    id: p.id.clone(),
                    position: p.position,
                    bounds: p.bounds,
                    connections: ShelfLinks {
                        left: p.connections.start.clone(),
                        right: p.connections.end.clone(),
                    },
                },
                PanelKind::Divider => PanelRecord::Divider {
                    id: p.id.clone(),
                    position: p.position,
                    bounds: p.bounds,
                    connections: DividerLinks {
                        bottom: p.connections.start.clone(),
                        top: p.connections.end.clone(),
                    },
                },
            })
            .collect();

        let mut drawers: Vec<&Drawer> = self.drawers.values().collect();
        drawers.sort_by(|a, b| a.id.cmp(&b.id));
        let drawers = drawers
            .into_iter()
            .map(|d| DrawerRecord::Drawer {
                id: d.id.clone(),
                connections: DrawerLinks {
                    bottom_shelf: d.connections.bottom.as_ref().map(Into::into),
                    top_shelf: d.connections.top.as_ref().map(Into::into),
                    left_divider: d.connections.left.as_ref().map(Into::into),
                    right_divider: d.connections.right.as_ref().map(Into::into),
                },
                stack: d.stack,
            })
            .collect();

        DesignSnapshot {
            cabinet: self.cabinet,
            panels,
            drawers,
            next_panel_id: self.next_panel_id,
            next_drawer_id: self.next_drawer_id,
            next_stack_id: self.next_stack_id,
        }
    }

    /// Replace the whole state with a snapshot.
    ///
    /// Panel references are validated against the snapshot's own panel set
    /// before anything is touched, so a dangling panel link fails cleanly.
    /// A drawer with a missing or dangling required connection is logged and
    /// skipped rather than failing the restore. Ribs, volumes and parts are
    /// derived state and recomputed from scratch.
    pub fn restore(&mut self, snapshot: &DesignSnapshot) -> Result<(), EngineError> {
        let ids: HashSet<&PanelId> = snapshot.panels.iter().map(|r| r.id()).collect();
        for record in &snapshot.panels {
            let (start, end) = record.links();
            for linked in [start, end].into_iter().flatten() {
                if !ids.contains(linked) {
                    return Err(EngineError::UnknownReference {
                        id: linked.clone(),
                    });
                }
            }
        }

        self.cabinet = snapshot.cabinet;
        self.panels.clear();
        self.drawers.clear();
        self.next_panel_id = snapshot.next_panel_id;
        self.next_drawer_id = snapshot.next_drawer_id;
        self.next_stack_id = snapshot.next_stack_id;

        for record in &snapshot.panels {
            let panel = match record {
                PanelRecord::Shelf {
                    id,
                    position,
                    bounds,
                    connections,
                } => Panel {
                    id: id.clone(),
                    kind: PanelKind::Shelf,
                    position: *position,
                    bounds: *bounds,
                    connections: PanelConnections {
                        start: connections.left.clone(),
                        end: connections.right.clone(),
                    },
                    ribs: Vec::new(),
                },
                PanelRecord::Divider {
                    id,
                    position,
                    bounds,
                    connections,
                } => Panel {
                    id: id.clone(),
                    kind: PanelKind::Divider,
                    position: *position,
                    bounds: *bounds,
                    connections: PanelConnections {
                        start: connections.bottom.clone(),
                        end: connections.top.clone(),
                    },
                    ribs: Vec::new(),
                },
            };
            self.panels.insert(panel.id.clone(), panel);
        }

        for record in &snapshot.drawers {
            let DrawerRecord::Drawer {
                id,
                connections,
                stack,
            } = record;

            let links = [
                &connections.bottom_shelf,
                &connections.top_shelf,
                &connections.left_divider,
                &connections.right_divider,
            ];
            let dangling = links.into_iter().flatten().any(|b| {
                b.panel_id()
                    .map_or(false, |pid| !self.panels.contains_key(pid))
            });
            if dangling {
                warn!(drawer = %id, "skipping drawer with dangling connection");
                continue;
            }

            let drawer = Drawer {
                id: id.clone(),
                connections: DrawerConnections {
                    bottom: connections.bottom_shelf.as_ref().map(|b| b.to_boundary()),
                    top: connections.top_shelf.as_ref().map(|b| b.to_boundary()),
                    left: connections.left_divider.as_ref().map(|b| b.to_boundary()),
                    right: connections.right_divider.as_ref().map(|b| b.to_boundary()),
                },
                stack: *stack,
                volume: None,
                box_length: None,
                parts: None,
                is_open: false,
            };
            self.drawers.insert(drawer.id.clone(), drawer);
        }

        self.refresh_all_ribs();

        let drawer_ids: Vec<DrawerId> = self.drawers.keys().cloned().collect();
        for id in drawer_ids {
            if let Err(error) = self.refresh_drawer(&id) {
                warn!(drawer = %id, %error, "dropping drawer that no longer fits");
                self.drawers.remove(&id);
            }
        }

        Ok(())
    }

    /// Build an engine from a snapshot, seeding the history with it.
    pub fn from_snapshot(snapshot: &DesignSnapshot) -> Result<Self, EngineError> {
        let mut engine = Self::with_carcass(snapshot.cabinet);
        engine.restore(snapshot)?;
        engine.history = crate::history::History::new();
        let baseline = engine.snapshot();
        engine.history.push(baseline);
        Ok(engine)
    }
}

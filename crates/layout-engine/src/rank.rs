//! Recession rank: how far a panel sits behind the cabinet's front face.
//!
//! Carcass sides are the assembly base (rank 0); bottom, top and plinth
//! mount onto them (rank 1); every other panel is one deeper than its
//! deepest parent. The connection graph is a DAG by construction, but the
//! recursion still guards against cycles so a corrupted snapshot cannot
//! hang the engine.

use std::collections::HashMap;

use tracing::warn;
use wardrobe_types::{BoundaryRef, BoundarySide, PanelId};

use crate::Engine;

impl Engine {
    /// Recession rank of a panel, derived from its connection ancestry.
    pub fn panel_rank(&self, id: &PanelId) -> u32 {
        let mut memo = HashMap::new();
        self.rank_memoized(id, &mut memo)
    }

    /// Rank of a section boundary: virtual sides resolve to their fixed
    /// rank, real panels recurse.
    pub fn boundary_rank(&self, boundary: &BoundaryRef) -> u32 {
        match boundary {
            BoundaryRef::Side(BoundarySide::Left) | BoundaryRef::Side(BoundarySide::Right) => 0,
            BoundaryRef::Side(BoundarySide::Bottom) | BoundaryRef::Side(BoundarySide::Top) => 1,
            BoundaryRef::Panel(id) => self.panel_rank(id),
        }
    }

    /// Memoized recursion. `None` in the memo marks a node whose rank is
    /// still being computed; revisiting one means a cycle.
    fn rank_memoized(&self, id: &PanelId, memo: &mut HashMap<PanelId, Option<u32>>) -> u32 {
        match memo.get(id) {
            Some(Some(rank)) => return *rank,
            Some(None) => {
                warn!(panel = %id, "connection cycle detected during rank computation");
                return 0;
            }
            None => {}
        }
        memo.insert(id.clone(), None);

        let rank = match self.panels.get(id) {
            Some(panel) => {
                let mut max_parent = 0;
                for parent in [&panel.connections.start, &panel.connections.end]
                    .into_iter()
                    .flatten()
                {
                    max_parent = max_parent.max(self.rank_memoized(parent, memo));
                }
                max_parent + 1
            }
            // A missing reference ranks like a carcass side.
            None => 0,
        };

        memo.insert(id.clone(), Some(rank));
        rank
    }
}

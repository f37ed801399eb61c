//! Mirroring the cabinet contents about its vertical center line.

use std::mem;

use tracing::warn;
use wardrobe_types::config::PANEL_THICKNESS;
use wardrobe_types::{BoundaryRef, DrawerId};

use crate::Engine;

impl Engine {
    /// Reflect every panel and drawer about `width / 2`.
    ///
    /// Shelves reflect their spans and swap their left/right connections;
    /// dividers reflect their left face (`x → width − x − thickness`).
    /// Drawers swap their left/right boundaries, and a virtual boundary
    /// changes side so the stand-in stays geometrically consistent.
    /// Applying the operation twice restores the original layout.
    pub fn mirror_content(&mut self) {
        if self.panels.is_empty() && self.drawers.is_empty() {
            return;
        }
        let width = self.cabinet.width;
        let t = PANEL_THICKNESS;

        for panel in self.panels.values_mut() {
            if panel.is_horizontal() {
                let (start, end) = (panel.bounds.start, panel.bounds.end);
                panel.bounds.start = width - end;
                panel.bounds.end = width - start;
                mem::swap(&mut panel.connections.start, &mut panel.connections.end);
            } else {
                panel.position = width - (panel.position + t);
            }
        }

        for drawer in self.drawers.values_mut() {
            mem::swap(&mut drawer.connections.left, &mut drawer.connections.right);
            for boundary in [&mut drawer.connections.left, &mut drawer.connections.right] {
                if let Some(BoundaryRef::Side(side)) = boundary {
                    *side = side.mirrored();
                }
            }
        }

        self.refresh_all_ribs();

        let drawer_ids: Vec<DrawerId> = self.drawers.keys().cloned().collect();
        for drawer_id in drawer_ids {
            if let Err(error) = self.refresh_drawer(&drawer_id) {
                warn!(drawer = %drawer_id, %error, "drawer update failed after mirror");
            }
        }

        self.commit();
    }
}

//! Stiffener rib placement.
//!
//! A shelf gets one rib per free span between the verticals that support it
//! (carcass sides plus crossing dividers) whenever that span exceeds the
//! rib threshold.

use wardrobe_types::config::{PANEL_THICKNESS, RIB_MIN_SPAN};
use wardrobe_types::{PanelId, PanelKind, Span};

use crate::Engine;

impl Engine {
    /// Recompute the stiffener ribs of one shelf. No-op for dividers.
    pub(crate) fn refresh_ribs(&mut self, shelf_id: &PanelId) {
        let Some(shelf) = self.panels.get(shelf_id) else {
            return;
        };
        if !shelf.is_horizontal() {
            return;
        }
        let bounds = shelf.bounds;
        let shelf_y = shelf.position;

        let mut verticals = vec![PANEL_THICKNESS, self.cabinet.width - PANEL_THICKNESS];
        for panel in self.panels.values() {
            if panel.kind == PanelKind::Divider
                && bounds.contains(panel.position)
                && panel.bounds.contains(shelf_y)
            {
                verticals.push(panel.position);
            }
        }
        verticals.sort_by(|a, b| a.total_cmp(b));

        let mut ribs = Vec::new();
        for pair in verticals.windows(2) {
            let start = pair[0].max(bounds.start);
            let end = pair[1].min(bounds.end);
            if end - start > RIB_MIN_SPAN {
                ribs.push(Span::new(start, end));
            }
        }

        if let Some(shelf) = self.panels.get_mut(shelf_id) {
            shelf.ribs = ribs;
        }
    }

    /// Recompute ribs for every shelf.
    pub(crate) fn refresh_all_ribs(&mut self) {
        for id in self.panel_ids_of_kind(PanelKind::Shelf) {
            self.refresh_ribs(&id);
        }
    }
}

//! Adding shelves and dividers.

use wardrobe_types::config::{MIN_GAP, MIN_SECTION, PANEL_THICKNESS};
use wardrobe_types::{PanelId, PanelKind, Span};

use crate::types::{EngineError, Panel, PanelConnections};
use crate::Engine;

impl Engine {
    /// Add a panel at `main_pos` along its main axis; `cross_pos` selects
    /// which section between perpendicular panels the new panel spans.
    ///
    /// The position is clamped into the carcass interior. The new panel runs
    /// between the two nearest perpendicular panels bracketing `cross_pos`
    /// (or the carcass edges), which become its connections. Fails without
    /// mutating anything if the resulting span is too small or a drawer
    /// occupies the swept area.
    pub fn add_panel(
        &mut self,
        kind: PanelKind,
        main_pos: f64,
        cross_pos: f64,
    ) -> Result<PanelId, EngineError> {
        let t = PANEL_THICKNESS;
        let main_pos = match kind {
            PanelKind::Shelf => main_pos
                .min(self.cabinet.height - t)
                .max(self.cabinet.base),
            PanelKind::Divider => main_pos
                .min(self.cabinet.width - t - MIN_GAP)
                .max(t + MIN_GAP),
        };

        // Perpendicular panels whose span covers the new position, ordered
        // along the cross axis.
        let mut crossing: Vec<(f64, PanelId)> = self
            .panels
            .values()
            .filter(|p| p.kind != kind && p.bounds.contains(main_pos))
            .map(|p| (p.position, p.id.clone()))
            .collect();
        crossing.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (low_edge, high_edge) = match kind {
            PanelKind::Shelf => (t, self.cabinet.width - t),
            PanelKind::Divider => (self.cabinet.base, self.cabinet.height - t),
        };

        // Bracket cross_pos in the ordered point list
        // [carcass edge, crossing panels..., carcass edge].
        let mut points: Vec<(f64, Option<PanelId>)> = Vec::with_capacity(crossing.len() + 2);
        points.push((low_edge, None));
        points.extend(crossing.into_iter().map(|(pos, id)| (pos, Some(id))));
        points.push((high_edge, None));

        let mut start = low_edge;
        let mut end = high_edge;
        let mut connections = PanelConnections::default();
        for pair in points.windows(2) {
            let (pos_a, ref panel_a) = pair[0];
            let (pos_b, ref panel_b) = pair[1];
            if cross_pos >= pos_a && cross_pos <= pos_b {
                start = pos_a + if panel_a.is_some() { t } else { 0.0 };
                end = pos_b;
                connections.start = panel_a.clone();
                connections.end = panel_b.clone();
                break;
            }
        }

        let size = end - start;
        if size < MIN_SECTION {
            return Err(EngineError::SectionTooSmall {
                size,
                min: MIN_SECTION,
            });
        }
        let span = Span::new(start, end);
        for other in self.panels.values() {
            if other.kind != kind || !other.bounds.overlaps(&span) {
                continue;
            }
            let distance = (other.position - main_pos).abs();
            if distance < MIN_GAP {
                return Err(EngineError::PanelTooClose {
                    distance,
                    min: MIN_GAP,
                });
            }
        }
        if self.has_drawer_in_area(kind, main_pos, start, end) {
            return Err(EngineError::DrawerInArea);
        }

        let id = PanelId::new(kind, self.next_panel_id);
        self.next_panel_id += 1;
        let panel = Panel {
            id: id.clone(),
            kind,
            position: main_pos,
            bounds: Span::new(start, end),
            connections,
            ribs: Vec::new(),
        };
        self.panels.insert(id.clone(), panel);

        match kind {
            PanelKind::Shelf => self.refresh_ribs(&id),
            PanelKind::Divider => {
                // A new divider splits the free span of every shelf it
                // passes through.
                let divider = self.panels[&id].clone();
                for shelf_id in self.panel_ids_of_kind(PanelKind::Shelf) {
                    let crossed = Panel::crosses(&divider, &self.panels[&shelf_id]);
                    if crossed {
                        self.refresh_ribs(&shelf_id);
                    }
                }
            }
        }

        self.commit();
        Ok(id)
    }

    /// True if a panel of `kind` at `main_pos`, spanning `cross_start..
    /// cross_end`, would pass through an existing drawer's volume. The main
    /// axis test is strict (grazing a drawer face is fine), the cross-axis
    /// overlap is not.
    pub fn has_drawer_in_area(
        &self,
        kind: PanelKind,
        main_pos: f64,
        cross_start: f64,
        cross_end: f64,
    ) -> bool {
        self.drawers.values().any(|drawer| {
            let Some(volume) = &drawer.volume else {
                return false;
            };
            let (main_span, cross_span) = match kind {
                PanelKind::Shelf => (volume.y, volume.x),
                PanelKind::Divider => (volume.x, volume.y),
            };
            main_span.contains_strict(main_pos)
                && !(cross_end <= cross_span.start || cross_start >= cross_span.end)
        })
    }
}

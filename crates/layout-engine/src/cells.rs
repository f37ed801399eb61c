//! Locating the section cell that contains a point.

use wardrobe_types::{BoundaryRef, BoundarySide, PanelId, Point};

use crate::Engine;

/// The four boundaries of one cell of the cabinet grid. Where no panel
/// bounds the cell, the carcass side stands in virtually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBounds {
    pub bottom: BoundaryRef,
    pub top: BoundaryRef,
    pub left: BoundaryRef,
    pub right: BoundaryRef,
}

impl Engine {
    /// Find the cell containing `at`: the nearest shelf below and above
    /// whose span covers the point's x, and the nearest divider left and
    /// right whose span covers the point's y.
    pub fn find_cell(&self, at: Point) -> CellBounds {
        let mut bottom: Option<(f64, PanelId)> = None;
        let mut top: Option<(f64, PanelId)> = None;
        let mut left: Option<(f64, PanelId)> = None;
        let mut right: Option<(f64, PanelId)> = None;

        for panel in self.panels.values() {
            if panel.is_horizontal() {
                if !panel.bounds.contains(at.x) {
                    continue;
                }
                if panel.position <= at.y {
                    if bottom.as_ref().map_or(true, |(pos, _)| panel.position > *pos) {
                        bottom = Some((panel.position, panel.id.clone()));
                    }
                } else if top.as_ref().map_or(true, |(pos, _)| panel.position < *pos) {
                    top = Some((panel.position, panel.id.clone()));
                }
            } else {
                if !panel.bounds.contains(at.y) {
                    continue;
                }
                if panel.position <= at.x {
                    if left.as_ref().map_or(true, |(pos, _)| panel.position > *pos) {
                        left = Some((panel.position, panel.id.clone()));
                    }
                } else if right.as_ref().map_or(true, |(pos, _)| panel.position < *pos) {
                    right = Some((panel.position, panel.id.clone()));
                }
            }
        }

        let resolve = |found: Option<(f64, PanelId)>, side: BoundarySide| match found {
            Some((_, id)) => BoundaryRef::Panel(id),
            None => BoundaryRef::Side(side),
        };

        CellBounds {
            bottom: resolve(bottom, BoundarySide::Bottom),
            top: resolve(top, BoundarySide::Top),
            left: resolve(left, BoundarySide::Left),
            right: resolve(right, BoundarySide::Right),
        }
    }
}

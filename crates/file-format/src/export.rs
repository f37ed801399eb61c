//! Manufacturing cut-list export.
//!
//! A read-only projection of the design into the flat part list a workshop
//! consumes: the fixed carcass parts, every user panel with its rank-derived
//! recessed depth, and one entry per stiffener rib.

use chrono::{DateTime, Utc};
use layout_engine::types::Panel;
use layout_engine::Engine;
use serde::Serialize;
use wardrobe_types::config::{BACK_THICKNESS, PANEL_THICKNESS, RIB_DEPTH, RIB_HEIGHT};
use wardrobe_types::PanelKind;

/// One part of the cut list. Coordinates are millimetres in the cabinet
/// frame: X from the left outer face, Y from the floor, Z from the back.
#[derive(Debug, Clone, Serialize)]
pub struct CutPart {
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: String,
    /// Recession rank; −1 is the HDF back, 0 the sides.
    pub rank: i32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
}

/// The exported bill of materials.
#[derive(Debug, Clone, Serialize)]
pub struct CutList {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub cabinet: CutListCabinet,
    pub parts: Vec<CutPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CutListCabinet {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Project the current design into a cut list.
pub fn export_cut_list(engine: &Engine) -> CutList {
    let cab = engine.cabinet();
    let t = PANEL_THICKNESS;
    let hdf = BACK_THICKNESS;
    let mut parts = fixed_carcass_parts(cab.width, cab.height, cab.depth, cab.base);

    let mut panels: Vec<&Panel> = engine.panels().collect();
    panels.sort_by(|a, b| a.id.cmp(&b.id));

    let mut shelf_index = 0;
    let mut divider_index = 0;
    for panel in panels {
        let rank = engine.panel_rank(&panel.id) as i32;
        let depth = (cab.depth - hdf) - rank as f64;

        match panel.kind {
            PanelKind::Shelf => {
                shelf_index += 1;
                let name = format!("Shelf {}", shelf_index);
                parts.push(CutPart {
                    name: name.clone(),
                    part_type: "shelf".to_string(),
                    rank,
                    x: panel.bounds.start.round(),
                    y: panel.position.round(),
                    z: hdf,
                    width: panel.bounds.len().round(),
                    height: t,
                    depth,
                    thickness: t,
                });
                for (i, rib) in panel.ribs.iter().enumerate() {
                    parts.push(CutPart {
                        name: format!("Rib {} for {}", i + 1, name),
                        part_type: "rib".to_string(),
                        // Ribs inherit the rank of their shelf.
                        rank,
                        x: rib.start.round(),
                        y: panel.position.round() - RIB_HEIGHT,
                        z: hdf,
                        width: rib.len().round(),
                        height: RIB_HEIGHT,
                        depth: RIB_DEPTH,
                        thickness: t,
                    });
                }
            }
            PanelKind::Divider => {
                divider_index += 1;
                parts.push(CutPart {
                    name: format!("Divider {}", divider_index),
                    part_type: "divider".to_string(),
                    rank,
                    x: panel.position.round(),
                    y: panel.bounds.start.round(),
                    z: hdf,
                    width: t,
                    height: panel.bounds.len().round(),
                    depth,
                    thickness: t,
                });
            }
        }
    }

    CutList {
        version: "1.0".to_string(),
        exported_at: Utc::now(),
        cabinet: CutListCabinet {
            width: cab.width,
            height: cab.height,
            depth: cab.depth,
        },
        parts,
    }
}

fn fixed_carcass_parts(width: f64, height: f64, depth: f64, base: f64) -> Vec<CutPart> {
    let t = PANEL_THICKNESS;
    let hdf = BACK_THICKNESS;
    vec![
        CutPart {
            name: "Left Side".to_string(),
            part_type: "left-side".to_string(),
            rank: 0,
            x: 0.0,
            y: 0.0,
            z: hdf,
            width: t,
            height,
            depth: depth - hdf,
            thickness: t,
        },
        CutPart {
            name: "Right Side".to_string(),
            part_type: "right-side".to_string(),
            rank: 0,
            x: width - t,
            y: 0.0,
            z: hdf,
            width: t,
            height,
            depth: depth - hdf,
            thickness: t,
        },
        CutPart {
            name: "Bottom".to_string(),
            part_type: "bottom".to_string(),
            rank: 1,
            x: t,
            y: base - t,
            z: hdf,
            width: width - 2.0 * t,
            height: t,
            depth: (depth - hdf) - 1.0,
            thickness: t,
        },
        CutPart {
            name: "Top".to_string(),
            part_type: "top".to_string(),
            rank: 1,
            x: t,
            y: height - t,
            z: hdf,
            width: width - 2.0 * t,
            height: t,
            depth: (depth - hdf) - 1.0,
            thickness: t,
        },
        CutPart {
            name: "Back HDF".to_string(),
            part_type: "back-hdf".to_string(),
            rank: -1,
            x: 1.0,
            y: base + 1.0,
            z: 0.0,
            width: width - 2.0,
            height: height - base - 2.0,
            depth: hdf,
            thickness: hdf,
        },
        CutPart {
            name: "Front Plinth".to_string(),
            part_type: "front-plinth".to_string(),
            rank: 1,
            x: t,
            y: 0.0,
            z: depth - t - 1.0,
            width: width - 2.0 * t,
            height: base - t,
            depth: t,
            thickness: t,
        },
        CutPart {
            name: "Back Plinth".to_string(),
            part_type: "back-plinth".to_string(),
            rank: 1,
            x: t,
            y: 0.0,
            z: 30.0 + t,
            width: width - 2.0 * t,
            height: base - t,
            depth: t,
            thickness: t,
        },
    ]
}

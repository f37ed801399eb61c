use wardrobe_types::config::{
    DRAWER_BACK_OFFSET, DRAWER_BOTTOM_OFFSET, DRAWER_GAP_BOTTOM, DRAWER_GAP_FRONT,
    DRAWER_GAP_TOP, DRAWER_INNER_OFFSET, DRAWER_SIDE_OFFSET_X, DRAWER_SIDE_OFFSET_Y,
    MAX_DRAWER_HEIGHT, PANEL_THICKNESS,
};
use wardrobe_types::Volume;

use crate::types::{DrawerPart, DrawerParts, PartPosition};

/// Derive the five cut parts of a drawer from its volume and box length.
///
/// The effective height is capped at the maximum drawer height: in a taller
/// section the drawer sits at the bottom and the space above stays empty.
/// All parts are anchored to the bottom of the volume for the same reason.
pub fn derive_parts(volume: &Volume, box_length: f64) -> DrawerParts {
    let t = PANEL_THICKNESS;
    let width = volume.x.len();
    let height = volume.y.len().min(MAX_DRAWER_HEIGHT);
    let x_mid = volume.x.mid();
    let y0 = volume.y.start;

    let front_inset = DRAWER_GAP_BOTTOM + DRAWER_GAP_TOP;
    let side_height = height - 56.0;
    let side_depth = box_length - 26.0;
    let bottom_depth = box_length - 44.0;

    // Z chain, front face backwards: front panel, then sides, back, bottom.
    let front_z = volume.z.end;
    let sides_z2 = front_z - t;
    let sides_z1 = sides_z2 - side_depth;
    let back_z = sides_z1 + DRAWER_BACK_OFFSET;
    let bottom_z1 = sides_z1 + t + DRAWER_BOTTOM_OFFSET;
    let bottom_z2 = bottom_z1 + bottom_depth;

    let front = DrawerPart {
        width: width - 2.0 * DRAWER_GAP_FRONT,
        height: height - front_inset,
        depth: t,
        position: PartPosition::new(
            x_mid,
            y0 + DRAWER_GAP_BOTTOM + (height - front_inset) / 2.0,
            front_z - t / 2.0,
        ),
    };

    let side_y = y0 + DRAWER_SIDE_OFFSET_Y + side_height / 2.0;
    let side_z = (sides_z1 + sides_z2) / 2.0;

    let left_side = DrawerPart {
        width: t,
        height: side_height,
        depth: side_depth,
        position: PartPosition::new(
            volume.x.start + DRAWER_SIDE_OFFSET_X + t / 2.0,
            side_y,
            side_z,
        ),
    };

    let right_side = DrawerPart {
        width: t,
        height: side_height,
        depth: side_depth,
        position: PartPosition::new(
            volume.x.end - DRAWER_INNER_OFFSET + t / 2.0,
            side_y,
            side_z,
        ),
    };

    let back = DrawerPart {
        width: width - 42.0,
        height: height - 68.0,
        depth: t,
        position: PartPosition::new(x_mid, y0 + 27.0 + (height - 68.0) / 2.0, back_z + t / 2.0),
    };

    let bottom = DrawerPart {
        width: width - 42.0,
        height: t,
        depth: bottom_depth,
        position: PartPosition::new(x_mid, y0 + 27.0 + t / 2.0, (bottom_z1 + bottom_z2) / 2.0),
    };

    DrawerParts {
        front,
        left_side,
        right_side,
        back,
        bottom,
    }
}

use wardrobe_types::config::{
    BOX_LENGTHS, DRAWER_DEPTH_CLEARANCE, MAX_DRAWER_WIDTH, MIN_DRAWER_HEIGHT, MIN_DRAWER_WIDTH,
    PANEL_THICKNESS,
};
use wardrobe_types::{Span, Volume};

use crate::types::{OpError, SectionEnvelope};

/// Compute the usable volume of a drawer from its section envelope.
///
/// For stack members, pass the slot `(index, count)`: the section height is
/// divided evenly and the drawer occupies its slot only. The Z span runs
/// from the back of the section to the front minus the depth clearance.
pub fn drawer_volume(
    envelope: &SectionEnvelope,
    slot: Option<(usize, usize)>,
) -> Result<Volume, OpError> {
    let width = envelope.x.len();
    if width < MIN_DRAWER_WIDTH || width > MAX_DRAWER_WIDTH {
        return Err(OpError::WidthOutOfRange {
            width,
            min: MIN_DRAWER_WIDTH,
            max: MAX_DRAWER_WIDTH,
        });
    }

    let y = match slot {
        Some((index, count)) => {
            let slot_height = envelope.y.len() / count as f64;
            Span::new(
                envelope.y.start + slot_height * index as f64,
                envelope.y.start + slot_height * (index + 1) as f64,
            )
        }
        None => envelope.y,
    };

    let height = y.len();
    if height < MIN_DRAWER_HEIGHT {
        return Err(OpError::HeightTooSmall {
            height,
            min: MIN_DRAWER_HEIGHT,
        });
    }

    Ok(Volume {
        x: envelope.x,
        y,
        z: Span::new(0.0, envelope.depth - DRAWER_DEPTH_CLEARANCE),
    })
}

/// Pick the largest standard box length that fits the volume depth.
///
/// The volume excludes the front panel, so one panel thickness is added to
/// the available depth. A section deeper than every standard size gets the
/// largest size (the front panel absorbs the extra depth); a section
/// shallower than the smallest size is an error.
pub fn select_box_length(volume_depth: f64) -> Result<f64, OpError> {
    let available = volume_depth + PANEL_THICKNESS;
    BOX_LENGTHS
        .iter()
        .rev()
        .find(|&&size| size <= available)
        .copied()
        .ok_or(OpError::NoBoxLength { available })
}

use serde::{Deserialize, Serialize};
use wardrobe_types::{Point, Span};

/// The inner rectangle of a drawer section with its available depth,
/// already resolved against the live carcass and bounding panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionEnvelope {
    /// Inner horizontal extent (between divider/side faces).
    pub x: Span,
    /// Inner vertical extent (between shelf/bottom/top faces).
    pub y: Span,
    /// Depth available in front of the most recessed bounding panel.
    pub depth: f64,
}

/// One physical drawer component as an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerPart {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Center of the part. Z is measured from the back of the section.
    pub position: PartPosition,
}

/// 3D center position of a drawer part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn xy(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The five cut parts of one drawer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerParts {
    pub front: DrawerPart,
    pub left_side: DrawerPart,
    pub right_side: DrawerPart,
    pub back: DrawerPart,
    pub bottom: DrawerPart,
}

/// Errors from drawer math.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpError {
    #[error("drawer width {width} mm outside allowed range {min}..{max} mm")]
    WidthOutOfRange { width: f64, min: f64, max: f64 },

    #[error("drawer height {height} mm below minimum {min} mm")]
    HeightTooSmall { height: f64, min: f64 },

    #[error("no standard box length fits available depth {available} mm")]
    NoBoxLength { available: f64 },
}

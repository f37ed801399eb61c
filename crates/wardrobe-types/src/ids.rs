use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of structural panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Horizontal panel spanning between vertical boundaries.
    Shelf,
    /// Vertical panel spanning between horizontal boundaries.
    Divider,
}

impl PanelKind {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, PanelKind::Shelf)
    }

    fn prefix(&self) -> &'static str {
        match self {
            PanelKind::Shelf => "shelf",
            PanelKind::Divider => "divider",
        }
    }
}

/// One of the four carcass boundaries a virtual neighbor can stand in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundarySide {
    Left,
    Right,
    Bottom,
    Top,
}

impl BoundarySide {
    /// The side produced by mirroring about the vertical center line.
    pub fn mirrored(&self) -> Self {
        match self {
            BoundarySide::Left => BoundarySide::Right,
            BoundarySide::Right => BoundarySide::Left,
            other => *other,
        }
    }
}

impl fmt::Display for BoundarySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundarySide::Left => "left",
            BoundarySide::Right => "right",
            BoundarySide::Bottom => "bottom",
            BoundarySide::Top => "top",
        };
        f.write_str(name)
    }
}

/// Stable panel identifier, assigned sequentially at creation
/// (`shelf-0`, `divider-3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(kind: PanelKind, n: u64) -> Self {
        Self(format!("{}-{}", kind.prefix(), n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable drawer identifier (`drawer-0`, `drawer-1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawerId(String);

impl DrawerId {
    pub fn new(n: u64) -> Self {
        Self(format!("drawer-{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrawerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier shared by all drawers of one stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackId(pub u64);

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack-{}", self.0)
    }
}

use crate::ids::{BoundarySide, PanelId};

/// One edge of a drawer section: either a real panel, resolved through the
/// panel arena at use time, or a virtual stand-in for a carcass boundary.
///
/// Virtual boundaries carry no coordinates of their own; they always resolve
/// against the live carcass dimensions, never against a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundaryRef {
    Panel(PanelId),
    Side(BoundarySide),
}

impl BoundaryRef {
    pub fn is_virtual(&self) -> bool {
        matches!(self, BoundaryRef::Side(_))
    }

    pub fn as_panel(&self) -> Option<&PanelId> {
        match self {
            BoundaryRef::Panel(id) => Some(id),
            BoundaryRef::Side(_) => None,
        }
    }

    pub fn as_side(&self) -> Option<BoundarySide> {
        match self {
            BoundaryRef::Side(side) => Some(*side),
            BoundaryRef::Panel(_) => None,
        }
    }
}

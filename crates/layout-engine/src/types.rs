use drawer_ops::DrawerParts;
use serde::{Deserialize, Serialize};
use wardrobe_types::config::{BACK_THICKNESS, PANEL_THICKNESS};
use wardrobe_types::{
    BoundaryRef, BoundarySide, DrawerId, PanelId, PanelKind, Span, StackId, Volume,
};

/// The outer cabinet shell. `base` is the plinth height; the usable interior
/// starts above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Carcass {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub base: f64,
}

impl Carcass {
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * PANEL_THICKNESS
    }

    pub fn inner_depth(&self) -> f64 {
        self.depth - BACK_THICKNESS
    }

    pub fn work_height(&self) -> f64 {
        self.height - self.base - PANEL_THICKNESS
    }

    /// Inner-face coordinate of a carcass boundary. This is what a virtual
    /// boundary resolves to wherever a real panel face would be used.
    pub fn inner_edge(&self, side: BoundarySide) -> f64 {
        match side {
            BoundarySide::Left => PANEL_THICKNESS,
            BoundarySide::Right => self.width - PANEL_THICKNESS,
            BoundarySide::Bottom => self.base,
            BoundarySide::Top => self.height - PANEL_THICKNESS,
        }
    }
}

/// Neighbors bounding a panel's cross-axis extent. `start` is the left
/// neighbor for shelves and the bottom neighbor for dividers; `None` means
/// the panel runs to the carcass itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelConnections {
    pub start: Option<PanelId>,
    pub end: Option<PanelId>,
}

/// A structural panel: a shelf or a divider.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub kind: PanelKind,
    /// Main-axis coordinate of the panel's lower face: y of the underside
    /// for shelves, x of the left face for dividers.
    pub position: f64,
    /// Extent along the cross axis (x for shelves, y for dividers).
    pub bounds: Span,
    pub connections: PanelConnections,
    /// Stiffener spans; shelves only, recomputed after every mutation.
    pub ribs: Vec<Span>,
}

impl Panel {
    pub fn is_horizontal(&self) -> bool {
        self.kind.is_horizontal()
    }

    pub fn size(&self) -> f64 {
        self.bounds.len()
    }

    /// True if `divider` passes through `shelf`: the divider's x lies within
    /// the shelf's span and the divider's y span covers the shelf.
    pub fn crosses(divider: &Panel, shelf: &Panel) -> bool {
        debug_assert!(!divider.is_horizontal() && shelf.is_horizontal());
        shelf.bounds.contains(divider.position) && divider.bounds.contains(shelf.position)
    }
}

/// The four section boundaries a drawer hangs between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerConnections {
    pub bottom: Option<BoundaryRef>,
    pub top: Option<BoundaryRef>,
    pub left: Option<BoundaryRef>,
    pub right: Option<BoundaryRef>,
}

/// Membership of a drawer in a vertical stack sharing one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSlot {
    pub id: StackId,
    /// Slot index, 0 at the bottom.
    pub index: usize,
    /// Total number of slots in the stack.
    pub count: usize,
}

/// One drawer, or one slot of a stacked group.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawer {
    pub id: DrawerId,
    pub connections: DrawerConnections,
    pub stack: Option<StackSlot>,
    /// Derived usable volume; recomputed, never persisted.
    pub volume: Option<Volume>,
    /// Chosen standard box length.
    pub box_length: Option<f64>,
    /// Derived physical parts.
    pub parts: Option<DrawerParts>,
    /// Presentation flag; not part of the geometry.
    pub is_open: bool,
}

impl Drawer {
    /// The drawer's boundary refs in (bottom, top, left, right) order, or
    /// `None` if any required connection is missing.
    pub fn boundary_refs(&self) -> Option<[&BoundaryRef; 4]> {
        Some([
            self.connections.bottom.as_ref()?,
            self.connections.top.as_ref()?,
            self.connections.left.as_ref()?,
            self.connections.right.as_ref()?,
        ])
    }

    pub fn touches_panel(&self, id: &PanelId) -> bool {
        let hit = |c: &Option<BoundaryRef>| matches!(c, Some(BoundaryRef::Panel(p)) if p == id);
        hit(&self.connections.bottom)
            || hit(&self.connections.top)
            || hit(&self.connections.left)
            || hit(&self.connections.right)
    }

    pub fn touches_side(&self, side: BoundarySide) -> bool {
        let hit = |c: &Option<BoundaryRef>| matches!(c, Some(BoundaryRef::Side(s)) if *s == side);
        hit(&self.connections.bottom)
            || hit(&self.connections.top)
            || hit(&self.connections.left)
            || hit(&self.connections.right)
    }
}

/// Errors from the layout engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("panel not found: {id}")]
    PanelNotFound { id: PanelId },

    #[error("drawer not found: {id}")]
    DrawerNotFound { id: DrawerId },

    #[error("section too small: {size} mm (minimum {min} mm)")]
    SectionTooSmall { size: f64, min: f64 },

    #[error("a drawer occupies the target area")]
    DrawerInArea,

    #[error("a parallel panel is {distance} mm away (minimum {min} mm)")]
    PanelTooClose { distance: f64, min: f64 },

    #[error("drawer slot height {height} mm below minimum {min} mm")]
    SlotTooShort { height: f64, min: f64 },

    #[error("stack count {count} outside 1..={max}")]
    InvalidStackCount { count: usize, max: usize },

    #[error("drawer {id} is missing its {side} connection")]
    MissingConnection { id: DrawerId, side: BoundarySide },

    #[error("reference to unknown panel: {id}")]
    UnknownReference { id: PanelId },

    #[error("drawer operation failed: {0}")]
    Drawer(#[from] drawer_ops::OpError),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

//! Manufacturing constants. All lengths are millimetres.
//!
//! These are fixed material and hardware parameters, not derived quantities;
//! nothing in the engine should recompute them from geometry.

/// Thickness of a structural particle-board panel.
pub const PANEL_THICKNESS: f64 = 16.0;

/// Thickness of the HDF back panel.
pub const BACK_THICKNESS: f64 = 3.0;

/// Minimum distance between two parallel panels.
pub const MIN_GAP: f64 = 150.0;

/// Minimum width/height of a section enclosed by panels.
pub const MIN_SECTION: f64 = 150.0;

/// A shelf span longer than this gets a stiffener rib.
pub const RIB_MIN_SPAN: f64 = 800.0;

/// Height of a stiffener rib strip.
pub const RIB_HEIGHT: f64 = 100.0;

/// Depth (thickness) of a stiffener rib strip.
pub const RIB_DEPTH: f64 = 16.0;

// Carcass defaults and limits.

pub const DEFAULT_WIDTH: f64 = 1000.0;
pub const DEFAULT_HEIGHT: f64 = 2000.0;
pub const DEFAULT_DEPTH: f64 = 600.0;
pub const DEFAULT_BASE: f64 = 100.0;

pub const MIN_CABINET_WIDTH: f64 = 400.0;
pub const MAX_CABINET_WIDTH: f64 = 3000.0;
pub const MAX_CABINET_HEIGHT: f64 = 3000.0;
pub const MIN_BASE_HEIGHT: f64 = 60.0;

// Drawer hardware table.

/// Standard drawer-box lengths, ascending.
pub const BOX_LENGTHS: [f64; 6] = [270.0, 350.0, 400.0, 450.0, 500.0, 550.0];

pub const MIN_DRAWER_WIDTH: f64 = 250.0;
pub const MAX_DRAWER_WIDTH: f64 = 1200.0;
pub const MIN_DRAWER_HEIGHT: f64 = 150.0;
pub const MAX_DRAWER_HEIGHT: f64 = 400.0;

/// Maximum number of drawers sharing one section.
pub const MAX_STACK_COUNT: usize = 5;

/// Gap between the drawer box and the most recessed bounding panel.
pub const DRAWER_DEPTH_CLEARANCE: f64 = 2.0;

// Drawer part offsets (gaps between the section volume and the cut parts).

/// Horizontal gap on each side of the front panel.
pub const DRAWER_GAP_FRONT: f64 = 2.0;

/// Gap under the front panel.
pub const DRAWER_GAP_BOTTOM: f64 = 2.0;

/// Gap above the front panel.
pub const DRAWER_GAP_TOP: f64 = 28.0;

/// Side-panel inset from the volume edge, horizontally.
pub const DRAWER_SIDE_OFFSET_X: f64 = 5.0;

/// Side-panel inset from the volume bottom.
pub const DRAWER_SIDE_OFFSET_Y: f64 = 26.0;

/// Inset of the back and bottom panels from the volume edges.
pub const DRAWER_INNER_OFFSET: f64 = 21.0;

/// Back panel offset from the rear end of the sides.
pub const DRAWER_BACK_OFFSET: f64 = 10.0;

/// Bottom panel offset from the rear end of the sides.
pub const DRAWER_BOTTOM_OFFSET: f64 = 10.0;

//! Drawer manufacturing math.
//!
//! Pure functions from a resolved section envelope to a validated usable
//! volume, a standard box length, and the five physical parts of a drawer.
//! Resolving which panels bound the section (and how deep they sit) is the
//! layout engine's job; nothing here touches the entity graph.

pub mod parts;
pub mod types;
pub mod volume;

pub use parts::derive_parts;
pub use types::{DrawerPart, DrawerParts, OpError, PartPosition, SectionEnvelope};
pub use volume::{drawer_volume, select_box_length};

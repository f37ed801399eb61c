use layout_engine::history::History;
use layout_engine::snapshot::DesignSnapshot;
use serde::Serialize;

use crate::metadata::ProjectMetadata;

/// Format identifier written into every file.
pub const FORMAT_NAME: &str = "wardrobe";

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct WardrobeFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Project metadata.
    pub project: ProjectMetadata,
    /// The complete design state.
    pub design: DesignSnapshot,
    /// Undo/redo history at save time.
    pub history: History,
}

/// Serialize a design to a pretty-printed JSON string.
pub fn save_design(design: &DesignSnapshot, history: &History, metadata: &ProjectMetadata) -> String {
    let file = WardrobeFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        project: metadata.clone(),
        design: design.clone(),
        history: history.clone(),
    };
    serde_json::to_string_pretty(&file).expect("design snapshot serialization should never fail")
}

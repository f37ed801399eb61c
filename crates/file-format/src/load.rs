use layout_engine::history::History;
use layout_engine::snapshot::DesignSnapshot;
use serde::Deserialize;

use crate::errors::LoadError;
use crate::metadata::ProjectMetadata;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct WardrobeFileRaw {
    pub format: String,
    pub version: u32,
    pub project: ProjectMetadata,
    pub design: DesignSnapshot,
    #[serde(default)]
    pub history: Option<History>,
}

/// Deserialize a design from a JSON string.
///
/// Validates the format identifier and version, applying migrations for
/// older files. The history is optional; files without one get a fresh
/// history seeded by the caller.
pub fn load_design(
    json: &str,
) -> Result<(DesignSnapshot, Option<History>, ProjectMetadata), LoadError> {
    let raw: WardrobeFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let design = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.design, raw.version, FORMAT_VERSION)?
    } else {
        raw.design
    };

    Ok((design, raw.history, raw.project))
}

pub mod errors;
pub mod export;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod save;

pub use errors::LoadError;
pub use export::{export_cut_list, CutList, CutPart};
pub use load::load_design;
pub use metadata::ProjectMetadata;
pub use save::{save_design, FORMAT_NAME, FORMAT_VERSION};

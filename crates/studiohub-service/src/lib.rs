//! # studiohub-service
//!
//! Business logic service layer for StudioHub. Each service implements one
//! slice of the folder/project/asset lifecycle on top of the filesystem and
//! the XML documents from `studiohub-core`.
//!
//! Services follow constructor injection — every external path (config
//! template, layout document, skeleton source, templates root) is provided
//! at construction time; nothing is resolved against the process working
//! directory during an operation.

pub mod asset;
pub mod folder;
pub mod project;

pub use asset::AssetService;
pub use folder::{CONFIG_FILE, FolderService, TEMP_DIR, TOOLS_DIR};
pub use project::ProjectService;

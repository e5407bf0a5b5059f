//! Folder lifecycle operations.

pub mod service;

pub use service::{CONFIG_FILE, FolderService, TEMP_DIR, TOOLS_DIR};

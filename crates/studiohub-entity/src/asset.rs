//! Asset entity model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use studiohub_core::error::AppError;
use studiohub_core::result::AppResult;

/// A single templated working file, identified by its absolute path.
///
/// At creation time the path has no extension yet; the extension is
/// appended by the service once it is resolved from the tools config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Parent directory.
    pub dir: PathBuf,
    /// Base name of the asset file.
    pub name: String,
    /// Full path, extension included once resolved.
    pub path: PathBuf,
    /// Associated DCC application, when known.
    pub application: Option<String>,
    /// Asset-type category, when known.
    pub asset_type: Option<String>,
}

impl Asset {
    /// Build an asset handle from a path.
    pub fn from_path(
        path: &Path,
        application: Option<String>,
        asset_type: Option<String>,
    ) -> AppResult<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                AppError::validation(format!("Path has no base name: {}", path.display()))
            })?;
        let dir = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();

        Ok(Self {
            dir,
            name,
            path: path.to_path_buf(),
            application,
            asset_type,
        })
    }

    /// The asset's file extension, dot included, when present.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
    }

    /// The sibling path this asset would occupy under a new file name.
    pub fn sibling(&self, new_name: &str) -> PathBuf {
        self.dir.join(new_name)
    }
}

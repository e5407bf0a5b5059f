//! Folder entity model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use studiohub_core::error::AppError;
use studiohub_core::result::AppResult;

/// A managed folder, identified by its absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Parent directory.
    pub dir: PathBuf,
    /// Base name of the folder.
    pub name: String,
    /// Full path (`dir` + `name`).
    pub path: PathBuf,
}

impl Folder {
    /// Build a folder handle from a path.
    ///
    /// Fails with a validation error when the path has no base name
    /// (e.g. a filesystem root).
    pub fn from_path(path: &Path) -> AppResult<Self> {
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
        })
    }

    /// The sibling path this folder would occupy under a new name.
    pub fn sibling(&self, new_name: &str) -> PathBuf {
        self.dir.join(new_name)
    }
}

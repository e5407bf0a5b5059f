//! Project entity model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::folder::Folder;

/// A project: a root folder plus the generated layout subtree and the
/// copied application skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The project root folder.
    pub root: Folder,
    /// Root of the copied skeleton inside the project
    /// (`<project>/<skeleton_dir>/<project name>`).
    pub skeleton_root: PathBuf,
}

impl Project {
    /// The project name (base name of the root folder).
    pub fn name(&self) -> &str {
        &self.root.name
    }
}

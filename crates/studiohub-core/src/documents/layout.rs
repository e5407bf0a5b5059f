//! Project layout document (`ProjectLayout.xml`).
//!
//! A tree of named folder nodes, nested to arbitrary depth, consumed once
//! at project-creation time:
//!
//! ```xml
//! <directory>
//!   <folder name="Art">
//!     <folder name="Characters"/>
//!     <folder name="Environments"/>
//!   </folder>
//!   <folder name="Design"/>
//! </directory>
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::result::AppResult;

/// Parsed project layout document.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectLayout {
    /// Top-level folder nodes, in document order.
    #[serde(rename = "folder", default)]
    pub folders: Vec<LayoutNode>,
}

/// One folder node in the layout tree.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutNode {
    /// Folder name (`name` attribute).
    #[serde(rename = "@name")]
    pub name: String,
    /// Nested child folders, in document order.
    #[serde(rename = "folder", default)]
    pub children: Vec<LayoutNode>,
}

impl ProjectLayout {
    /// Parse a project layout from an XML string.
    pub fn parse(xml: &str) -> AppResult<Self> {
        let parsed: Self = quick_xml::de::from_str(xml)?;
        Ok(parsed)
    }

    /// Read and parse a project layout file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let xml = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Project layout not found: {}", path.display()))
            } else {
                AppError::with_source(
                    crate::error::ErrorKind::Storage,
                    format!("Failed to read project layout: {}", path.display()),
                    e,
                )
            }
        })?;
        Self::parse(&xml)
    }

    /// Total number of folder nodes in the document.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[LayoutNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.folders)
    }
}

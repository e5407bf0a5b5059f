//! Filesystem path configuration.
//!
//! Every external input the services consume is an explicitly configured
//! path; nothing is resolved against the process working directory at
//! operation time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resolved locations for all external inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root directory of the managed workspace. Doubles as the stopping
    /// point for the nearest-config upward search.
    #[serde(default = "default_workspace_root")]
    pub workspace_root: PathBuf,
    /// Tools configuration template copied into every seeded folder.
    #[serde(default = "default_config_template")]
    pub config_template: PathBuf,
    /// Project layout document describing the folder tree of a new project.
    #[serde(default = "default_project_layout")]
    pub project_layout: PathBuf,
    /// Skeleton directory tree copied wholesale into every new project.
    #[serde(default = "default_skeleton_source")]
    pub skeleton_source: PathBuf,
    /// Name of the fixed project subdirectory the skeleton is copied under.
    #[serde(default = "default_skeleton_dir")]
    pub skeleton_dir: String,
    /// Root against which relative template entries in a tools config are
    /// resolved.
    #[serde(default = "default_templates_root")]
    pub templates_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            workspace_root: default_workspace_root(),
            config_template: default_config_template(),
            project_layout: default_project_layout(),
            skeleton_source: default_skeleton_source(),
            skeleton_dir: default_skeleton_dir(),
            templates_root: default_templates_root(),
        }
    }
}

fn default_workspace_root() -> PathBuf {
    PathBuf::from("data/workspace")
}

fn default_config_template() -> PathBuf {
    PathBuf::from("config/ConfigFileTemplate.xml")
}

fn default_project_layout() -> PathBuf {
    PathBuf::from("config/ProjectLayout.xml")
}

fn default_skeleton_source() -> PathBuf {
    PathBuf::from("config/skeleton/EngineProject")
}

fn default_skeleton_dir() -> String {
    "Engine".to_string()
}

fn default_templates_root() -> PathBuf {
    PathBuf::from("config/templates")
}

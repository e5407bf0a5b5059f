//! Folder create/rename/delete operations and utility-subfolder seeding.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use studiohub_core::error::{AppError, ErrorKind};
use studiohub_core::result::AppResult;
use studiohub_entity::folder::Folder;

/// Scratch subfolder created inside every managed folder.
pub const TEMP_DIR: &str = "Temp";
/// Tools subfolder holding the folder's own config copy.
pub const TOOLS_DIR: &str = "Tools";
/// File name of the per-folder tools configuration.
pub const CONFIG_FILE: &str = "config.xml";

/// Manages directory lifecycle and utility-subfolder seeding.
///
/// No in-memory state is retained between calls; every operation's side
/// effects are confined to the filesystem.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Tools configuration template copied into every seeded folder.
    config_template: PathBuf,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(config_template: PathBuf) -> Self {
        Self { config_template }
    }

    /// The configured tools configuration template path.
    pub fn config_template(&self) -> &Path {
        &self.config_template
    }

    /// Ensure a managed folder exists at `path`.
    ///
    /// If the directory already exists this is a pure wrap: existing
    /// contents, any existing config included, are left untouched. If it
    /// does not, the directory is created (the parent must already exist)
    /// and seeded with `Temp/` and `Tools/config.xml`.
    pub fn ensure(&self, path: &Path) -> AppResult<Folder> {
        let folder = Folder::from_path(path)?;

        if path.exists() {
            debug!(path = %path.display(), "Folder already exists");
            return Ok(folder);
        }

        fs::create_dir(path).map_err(|e| {
            AppError::with_source(
                classify_io(&e),
                format!("Failed to create folder: {}", path.display()),
                e,
            )
        })?;
        self.seed(path)?;

        info!(path = %path.display(), "Created folder");
        Ok(folder)
    }

    /// Seed a directory with its utility subfolders.
    ///
    /// Idempotent: `Temp/`, `Tools/`, and `Tools/config.xml` are created
    /// only where missing, so re-seeding never clobbers existing content.
    /// The config copy is verbatim, never merged with an ancestor's.
    pub fn seed(&self, path: &Path) -> AppResult<()> {
        let temp = path.join(TEMP_DIR);
        if !temp.exists() {
            fs::create_dir(&temp).map_err(|e| {
                AppError::with_source(
                    classify_io(&e),
                    format!("Failed to create temp subfolder: {}", temp.display()),
                    e,
                )
            })?;
        }

        let tools = path.join(TOOLS_DIR);
        if !tools.exists() {
            fs::create_dir(&tools).map_err(|e| {
                AppError::with_source(
                    classify_io(&e),
                    format!("Failed to create tools subfolder: {}", tools.display()),
                    e,
                )
            })?;
        }

        let config = tools.join(CONFIG_FILE);
        if !config.exists() {
            if !self.config_template.is_file() {
                return Err(AppError::storage(format!(
                    "Config template missing: {}",
                    self.config_template.display()
                )));
            }
            fs::copy(&self.config_template, &config).map_err(|e| {
                AppError::with_source(
                    classify_io(&e),
                    format!("Failed to copy config template to {}", config.display()),
                    e,
                )
            })?;
        }

        Ok(())
    }

    /// Recursively remove a folder and all of its contents.
    pub fn delete(&self, path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::not_found(format!(
                "Folder not found: {}",
                path.display()
            )));
        }

        fs::remove_dir_all(path).map_err(|e| {
            AppError::with_source(
                classify_io(&e),
                format!("Failed to delete folder: {}", path.display()),
                e,
            )
        })?;

        info!(path = %path.display(), "Deleted folder");
        Ok(())
    }

    /// Rename a folder in place, keeping its parent directory.
    pub fn rename(&self, path: &Path, new_name: &str) -> AppResult<Folder> {
        if new_name.is_empty() {
            return Err(AppError::validation("New folder name must not be empty"));
        }

        let folder = Folder::from_path(path)?;
        if !path.exists() {
            return Err(AppError::not_found(format!(
                "Folder not found: {}",
                path.display()
            )));
        }

        let new_path = folder.sibling(new_name);
        if new_path.exists() {
            return Err(AppError::conflict(format!(
                "Target already exists: {}",
                new_path.display()
            )));
        }

        fs::rename(path, &new_path).map_err(|e| {
            AppError::with_source(
                classify_io(&e),
                format!(
                    "Failed to rename {} to {}",
                    path.display(),
                    new_path.display()
                ),
                e,
            )
        })?;

        info!(from = %path.display(), to = %new_path.display(), "Renamed folder");
        Folder::from_path(&new_path)
    }

    /// Rename a selection of folders in one action.
    ///
    /// A single selection is renamed verbatim. With more than one target,
    /// each final name is `base` plus a 1-based ordinal matching the item's
    /// position in the selection, which keeps sibling names distinct.
    pub fn rename_all(&self, paths: &[PathBuf], base: &str) -> AppResult<Vec<Folder>> {
        let mut renamed = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let new_name = if paths.len() > 1 {
                format!("{base}{}", index + 1)
            } else {
                base.to_string()
            };
            renamed.push(self.rename(path, &new_name)?);
        }
        Ok(renamed)
    }
}

/// Map an `io::Error` to the matching typed error kind.
fn classify_io(e: &std::io::Error) -> ErrorKind {
    match e.kind() {
        std::io::ErrorKind::NotFound => ErrorKind::NotFound,
        std::io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        std::io::ErrorKind::AlreadyExists => ErrorKind::Conflict,
        _ => ErrorKind::Storage,
    }
}

//! Templated asset files: create from the tools config, open in the
//! registered application, rename, delete.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use studiohub_core::documents::tools::ToolsConfig;
use studiohub_core::error::{AppError, ErrorKind};
use studiohub_core::result::AppResult;
use studiohub_entity::asset::Asset;

use crate::folder::{CONFIG_FILE, TOOLS_DIR};

/// Upper bound on the nearest-config upward search when the workspace root
/// is never reached.
const MAX_CONFIG_SEARCH_DEPTH: usize = 16;

/// Manages templated asset files.
///
/// Every operation consults the nearest ancestor `Tools/config.xml` of the
/// asset's directory; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct AssetService {
    /// Stopping point for the nearest-config upward search.
    workspace_root: PathBuf,
    /// Root against which relative template entries resolve.
    templates_root: PathBuf,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(workspace_root: PathBuf, templates_root: PathBuf) -> Self {
        Self {
            workspace_root,
            templates_root,
        }
    }

    /// Locate the nearest ancestor `Tools/config.xml`, starting at `start`
    /// and walking upward.
    ///
    /// The search stops (inclusively) at the configured workspace root, or
    /// after a bounded number of ancestor levels, so an unrelated config
    /// outside the workspace is never picked up silently.
    fn find_tools_config(&self, start: &Path) -> AppResult<PathBuf> {
        let mut dir = start;
        for _ in 0..MAX_CONFIG_SEARCH_DEPTH {
            let candidate = dir.join(TOOLS_DIR).join(CONFIG_FILE);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if dir == self.workspace_root {
                break;
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }

        Err(AppError::not_found(format!(
            "No {TOOLS_DIR}/{CONFIG_FILE} found between {} and the workspace root",
            start.display()
        )))
    }

    /// Resolve a template entry to an absolute path.
    fn resolve_template(&self, template: &str) -> PathBuf {
        let path = Path::new(template);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.templates_root.join(path)
        }
    }

    /// Create a templated asset at `path` (extension omitted by the caller).
    ///
    /// The extension and initial content come entirely from the nearest
    /// tools config, keyed by `(application, asset_type)`. An asset that
    /// already exists at the resolved path short-circuits as a pure wrap.
    pub fn create(&self, path: &Path, application: &str, asset_type: &str) -> AppResult<Asset> {
        let handle = Asset::from_path(
            path,
            Some(application.to_string()),
            Some(asset_type.to_string()),
        )?;

        let config = ToolsConfig::from_path(&self.find_tools_config(&handle.dir)?)?;
        let extension = config.extension_for(application)?;
        let final_path = append_extension(path, extension);

        if final_path.exists() {
            debug!(path = %final_path.display(), "Asset already exists");
            return Asset::from_path(
                &final_path,
                Some(application.to_string()),
                Some(asset_type.to_string()),
            );
        }

        let template = self.resolve_template(config.template_for(application, asset_type)?);
        fs::copy(&template, &final_path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!(
                    "Failed to copy template {} to {}",
                    template.display(),
                    final_path.display()
                ),
                e,
            )
        })?;

        info!(
            path = %final_path.display(),
            application,
            asset_type,
            "Created asset"
        );
        Asset::from_path(
            &final_path,
            Some(application.to_string()),
            Some(asset_type.to_string()),
        )
    }

    /// Open an asset in the application registered for its extension.
    ///
    /// The launch is fire-and-forget: the child process is spawned detached
    /// and never waited on.
    pub fn open(&self, path: &Path) -> AppResult<Asset> {
        if !path.exists() {
            return Err(AppError::not_found(format!(
                "Asset not found: {}",
                path.display()
            )));
        }

        let asset = Asset::from_path(path, None, None)?;
        let extension = asset.extension().ok_or_else(|| {
            AppError::application_not_configured(format!(
                "Asset has no file extension: {}",
                path.display()
            ))
        })?;

        let config = ToolsConfig::from_path(&self.find_tools_config(&asset.dir)?)?;
        let app = config.application_for_extension(&extension)?;

        Command::new(&app.version).arg(path).spawn().map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to launch '{}'", app.version),
                e,
            )
        })?;

        info!(application = %app.name, path = %path.display(), "Opened asset");
        Ok(asset)
    }

    /// Rename an asset file in place.
    ///
    /// `new_name` is taken verbatim; the caller is responsible for carrying
    /// the correct extension.
    pub fn rename(&self, path: &Path, new_name: &str) -> AppResult<Asset> {
        if new_name.is_empty() {
            return Err(AppError::validation("New asset name must not be empty"));
        }

        let asset = Asset::from_path(path, None, None)?;
        if !path.exists() {
            return Err(AppError::not_found(format!(
                "Asset not found: {}",
                path.display()
            )));
        }

        let new_path = asset.sibling(new_name);
        if new_path.exists() {
            return Err(AppError::conflict(format!(
                "Target already exists: {}",
                new_path.display()
            )));
        }

        fs::rename(path, &new_path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!(
                    "Failed to rename {} to {}",
                    path.display(),
                    new_path.display()
                ),
                e,
            )
        })?;

        info!(from = %path.display(), to = %new_path.display(), "Renamed asset");
        Asset::from_path(&new_path, None, None)
    }

    /// Rename a selection of assets in one action.
    ///
    /// A single selection is renamed verbatim (extension included by the
    /// caller). With more than one target, each final name is `base` plus a
    /// 1-based ordinal plus the original file's extension, in selection
    /// order.
    pub fn rename_all(&self, paths: &[PathBuf], base: &str) -> AppResult<Vec<Asset>> {
        let mut renamed = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let new_name = if paths.len() > 1 {
                let extension = path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default();
                format!("{base}{}{extension}", index + 1)
            } else {
                base.to_string()
            };
            renamed.push(self.rename(path, &new_name)?);
        }
        Ok(renamed)
    }

    /// Delete a single asset file.
    pub fn delete(&self, path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::not_found(format!(
                "Asset not found: {}",
                path.display()
            )));
        }

        fs::remove_file(path).map_err(|e| {
            let kind = if e.kind() == std::io::ErrorKind::PermissionDenied {
                ErrorKind::Permission
            } else {
                ErrorKind::Storage
            };
            AppError::with_source(kind, format!("Failed to delete asset: {}", path.display()), e)
        })?;

        info!(path = %path.display(), "Deleted asset");
        Ok(())
    }
}

/// Append a registered extension (dot included) to a path, mirroring the
/// config's exact `fileType` value.
fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(extension);
    PathBuf::from(s)
}

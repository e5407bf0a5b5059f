//! Project creation driven by the layout document and the DCC skeleton.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use studiohub_core::documents::layout::{LayoutNode, ProjectLayout};
use studiohub_core::error::{AppError, ErrorKind};
use studiohub_core::result::AppResult;
use studiohub_entity::folder::Folder;
use studiohub_entity::project::Project;

use crate::folder::FolderService;

/// Creates projects: a seeded root folder, the layout-described subtree,
/// and a copy of the external DCC project skeleton.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Folder service used for every directory created along the way.
    folders: FolderService,
    /// Project layout document path.
    layout_path: PathBuf,
    /// Skeleton source tree copied into every new project.
    skeleton_source: PathBuf,
    /// Name of the fixed project subdirectory receiving the skeleton copy.
    skeleton_dir: String,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(
        folders: FolderService,
        layout_path: PathBuf,
        skeleton_source: PathBuf,
        skeleton_dir: String,
    ) -> Self {
        Self {
            folders,
            layout_path,
            skeleton_source,
            skeleton_dir,
        }
    }

    /// Validate every external input before any mutation.
    ///
    /// Creation is not transactional; validating the config template, the
    /// layout document, and the skeleton source up front is what keeps a
    /// doomed run from leaving a partial tree behind. A failure after this
    /// point (e.g. the disk filling mid-walk) still leaves whatever was
    /// created so far on disk.
    pub fn preflight(&self) -> AppResult<ProjectLayout> {
        if !self.folders.config_template().is_file() {
            return Err(AppError::storage(format!(
                "Config template missing: {}",
                self.folders.config_template().display()
            )));
        }

        let layout = ProjectLayout::from_path(&self.layout_path)?;

        if !self.skeleton_source.is_dir() {
            return Err(AppError::not_found(format!(
                "Skeleton source not found: {}",
                self.skeleton_source.display()
            )));
        }

        Ok(layout)
    }

    /// Create a project named `name` under `parent_dir`.
    ///
    /// An already-existing project directory short-circuits as a pure wrap;
    /// nothing inside it is touched or re-created.
    pub fn create_project(&self, parent_dir: &Path, name: &str) -> AppResult<Project> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Project name must not be empty"));
        }

        let layout = self.preflight()?;

        let path = parent_dir.join(name);
        if path.exists() {
            debug!(path = %path.display(), "Project already exists");
            return Ok(Project {
                root: Folder::from_path(&path)?,
                skeleton_root: path.join(&self.skeleton_dir).join(name),
            });
        }

        let root = self.folders.ensure(&path)?;

        for node in &layout.folders {
            self.create_layout_folder(&path, node)?;
        }

        let skeleton_root = self.instantiate_skeleton(&path, name)?;
        self.seed_skeleton_dirs(&path)?;

        info!(project = name, path = %path.display(), "Created project");
        Ok(Project {
            root,
            skeleton_root,
        })
    }

    /// Create one folder per layout node, depth-first in document order,
    /// seeding each independently.
    fn create_layout_folder(&self, parent: &Path, node: &LayoutNode) -> AppResult<()> {
        let path = parent.join(&node.name);
        self.folders.ensure(&path)?;
        for child in &node.children {
            self.create_layout_folder(&path, child)?;
        }
        Ok(())
    }

    /// Copy the skeleton tree to `<project>/<skeleton_dir>/<name>` and
    /// rename its identifying project file after the new project.
    ///
    /// The identifying file is the one in the copied root whose stem equals
    /// the skeleton source directory's base name; its extension survives
    /// the rename.
    fn instantiate_skeleton(&self, project_path: &Path, name: &str) -> AppResult<PathBuf> {
        let target = project_path.join(&self.skeleton_dir).join(name);
        copy_dir_recursive(&self.skeleton_source, &target)?;

        let skeleton_name = self
            .skeleton_source
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Skeleton source has no base name: {}",
                    self.skeleton_source.display()
                ))
            })?;

        let mut renamed = false;
        let entries = fs::read_dir(&target).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list copied skeleton: {}", target.display()),
                e,
            )
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to list copied skeleton: {}", target.display()),
                    e,
                )
            })?;
            let path = entry.path();
            if path.is_file() && path.file_stem() == Some(skeleton_name.as_os_str()) {
                let new_path = match path.extension() {
                    Some(ext) => target.join(format!("{name}.{}", ext.to_string_lossy())),
                    None => target.join(name),
                };
                fs::rename(&path, &new_path).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to rename skeleton project file: {}", path.display()),
                        e,
                    )
                })?;
                renamed = true;
                break;
            }
        }

        if !renamed {
            warn!(
                skeleton = %self.skeleton_source.display(),
                "Skeleton has no identifying project file to rename"
            );
        }

        Ok(target)
    }

    /// Seed every directory inside the copied skeleton with the utility
    /// subfolders, using a full enumeration rather than just the top level.
    fn seed_skeleton_dirs(&self, project_path: &Path) -> AppResult<()> {
        let root = project_path.join(&self.skeleton_dir);

        let mut dirs: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1) {
            let entry = entry.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to walk copied skeleton: {}", root.display()),
                    e,
                )
            })?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }

        for dir in dirs {
            self.folders.seed(&dir)?;
        }
        Ok(())
    }
}

/// Copy a directory tree, creating destination directories as needed.
fn copy_dir_recursive(src: &Path, dst: &Path) -> AppResult<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to walk skeleton: {}", src.display()),
                e,
            )
        })?;

        let rel = entry.path().strip_prefix(src).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Unexpected path outside skeleton: {}", entry.path().display()),
                e,
            )
        })?;
        let dest = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", dest.display()),
                    e,
                )
            })?;
        } else {
            fs::copy(entry.path(), &dest).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to copy {}", entry.path().display()),
                    e,
                )
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_trees() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("a/b")).unwrap();
        fs::write(src.join("root.txt"), "r").unwrap();
        fs::write(src.join("a/b/leaf.txt"), "l").unwrap();

        let dst = tmp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("root.txt")).unwrap(), "r");
        assert_eq!(fs::read_to_string(dst.join("a/b/leaf.txt")).unwrap(), "l");
    }

    #[test]
    fn unwalkable_skeleton_fails_seeding_instead_of_skipping() {
        let tmp = TempDir::new().unwrap();
        let template = tmp.path().join("ConfigFileTemplate.xml");
        fs::write(&template, "<tools><applications/></tools>").unwrap();

        let service = ProjectService::new(
            FolderService::new(template),
            tmp.path().join("ProjectLayout.xml"),
            tmp.path().join("skeleton"),
            "Engine".to_string(),
        );

        // The project has no Engine subdirectory, so the seeding walk
        // cannot even stat its root. That must surface, not seed nothing.
        let err = service.seed_skeleton_dirs(tmp.path()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
    }
}

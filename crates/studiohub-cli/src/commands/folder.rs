//! Folder management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use studiohub_core::config::AppConfig;
use studiohub_core::error::AppError;
use studiohub_entity::folder::Folder;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a managed folder (seeded with Temp and Tools)
    Create {
        /// Absolute path of the folder to create
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Recursively delete folders
    Delete {
        /// Folder paths to delete
        paths: Vec<PathBuf>,
    },
    /// Rename the selected folders (ordinal suffix when multiple)
    Rename {
        /// Folder paths to rename, in selection order
        paths: Vec<PathBuf>,
        /// New base name
        #[arg(short, long)]
        name: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Name
    name: String,
    /// Full path
    path: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            path: folder.path.display().to_string(),
        }
    }
}

/// Execute folder commands
pub fn execute(args: &FolderArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let services = super::build_services(config);

    match &args.command {
        FolderCommand::Create { path } => {
            let folder = services.folders.ensure(path)?;
            output::print_list(&[FolderRow::from(&folder)], format);
        }
        FolderCommand::Delete { paths } => {
            for path in paths {
                services.folders.delete(path)?;
                output::print_success(&format!("Deleted {}", path.display()));
            }
        }
        FolderCommand::Rename { paths, name } => {
            let renamed = services.folders.rename_all(paths, name)?;
            let rows: Vec<FolderRow> = renamed.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

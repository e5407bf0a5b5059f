//! Asset management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use studiohub_core::config::AppConfig;
use studiohub_core::error::AppError;
use studiohub_entity::asset::Asset;

/// Arguments for asset commands
#[derive(Debug, Args)]
pub struct AssetArgs {
    /// Asset subcommand
    #[command(subcommand)]
    pub command: AssetCommand,
}

/// Asset subcommands
#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// Create a templated asset (extension resolved from the tools config)
    Create {
        /// Asset path without extension
        #[arg(short, long)]
        path: PathBuf,
        /// DCC application name, e.g. Maya
        #[arg(short, long)]
        application: String,
        /// Asset type name, e.g. Model
        #[arg(short = 't', long)]
        asset_type: String,
    },
    /// Open assets in their registered applications
    Open {
        /// Asset paths to open
        paths: Vec<PathBuf>,
    },
    /// Rename the selected assets (ordinal suffix when multiple)
    Rename {
        /// Asset paths to rename, in selection order
        paths: Vec<PathBuf>,
        /// New base name (include the extension for a single asset)
        #[arg(short, long)]
        name: String,
    },
    /// Delete asset files
    Delete {
        /// Asset paths to delete
        paths: Vec<PathBuf>,
    },
}

/// Asset display row
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    /// Name
    name: String,
    /// Full path
    path: String,
    /// Application, when known
    application: String,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            path: asset.path.display().to_string(),
            application: asset.application.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute asset commands
pub fn execute(args: &AssetArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let services = super::build_services(config);

    match &args.command {
        AssetCommand::Create {
            path,
            application,
            asset_type,
        } => {
            let asset = services.assets.create(path, application, asset_type)?;
            output::print_list(&[AssetRow::from(&asset)], format);
        }
        AssetCommand::Open { paths } => {
            for path in paths {
                let asset = services.assets.open(path)?;
                output::print_success(&format!("Opened {}", asset.path.display()));
            }
        }
        AssetCommand::Rename { paths, name } => {
            let renamed = services.assets.rename_all(paths, name)?;
            let rows: Vec<AssetRow> = renamed.iter().map(AssetRow::from).collect();
            output::print_list(&rows, format);
        }
        AssetCommand::Delete { paths } => {
            for path in paths {
                services.assets.delete(path)?;
                output::print_success(&format!("Deleted {}", path.display()));
            }
        }
    }

    Ok(())
}

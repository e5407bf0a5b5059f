//! CLI command definitions and dispatch.

pub mod asset;
pub mod config;
pub mod folder;
pub mod project;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use studiohub_core::config::AppConfig;
use studiohub_core::error::AppError;
use studiohub_service::{AssetService, FolderService, ProjectService};

/// StudioHub — DCC project and asset management
#[derive(Debug, Parser)]
#[command(name = "studiohub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Project management
    Project(project::ProjectArgs),
    /// Asset management
    Asset(asset::AssetArgs),
    /// Configuration inspection and validation
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, config, self.format),
            Commands::Project(args) => project::execute(args, config, self.format),
            Commands::Asset(args) => asset::execute(args, config, self.format),
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}

/// The three services wired to the configured paths.
pub struct Services {
    /// Folder lifecycle operations.
    pub folders: FolderService,
    /// Project creation.
    pub projects: ProjectService,
    /// Asset lifecycle operations.
    pub assets: AssetService,
}

/// Helper: wire the services from configuration
pub fn build_services(config: &AppConfig) -> Services {
    let folders = FolderService::new(config.paths.config_template.clone());
    let projects = ProjectService::new(
        folders.clone(),
        config.paths.project_layout.clone(),
        config.paths.skeleton_source.clone(),
        config.paths.skeleton_dir.clone(),
    );
    let assets = AssetService::new(
        config.paths.workspace_root.clone(),
        config.paths.templates_root.clone(),
    );

    Services {
        folders,
        projects,
        assets,
    }
}

//! Project management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use studiohub_core::config::AppConfig;
use studiohub_core::error::AppError;

/// Arguments for project commands
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project subcommand
    #[command(subcommand)]
    pub command: ProjectCommand,
}

/// Project subcommands
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Create a project: layout tree plus DCC skeleton
    Create {
        /// Project name
        #[arg(short, long)]
        name: String,
        /// Parent directory (defaults to the configured workspace root)
        #[arg(short, long)]
        parent: Option<PathBuf>,
    },
}

/// Project display row
#[derive(Debug, Serialize, Tabled)]
struct ProjectRow {
    /// Name
    name: String,
    /// Project root path
    path: String,
    /// Copied skeleton root
    skeleton: String,
}

/// Execute project commands
pub fn execute(
    args: &ProjectArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::build_services(config);

    match &args.command {
        ProjectCommand::Create { name, parent } => {
            let parent = parent
                .clone()
                .unwrap_or_else(|| config.paths.workspace_root.clone());
            let project = services.projects.create_project(&parent, name)?;

            let row = ProjectRow {
                name: project.name().to_string(),
                path: project.root.path.display().to_string(),
                skeleton: project.skeleton_root.display().to_string(),
            };
            output::print_list(&[row], format);
        }
    }

    Ok(())
}

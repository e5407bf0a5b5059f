//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use studiohub_core::config::AppConfig;
use studiohub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate every configured external input (pre-flight)
    Check,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(config)
                    .unwrap_or_else(|_| "{}".to_string());
                println!("{}", json);
            }
            OutputFormat::Table => {
                output::print_kv(
                    "workspace_root",
                    &config.paths.workspace_root.display().to_string(),
                );
                output::print_kv(
                    "config_template",
                    &config.paths.config_template.display().to_string(),
                );
                output::print_kv(
                    "project_layout",
                    &config.paths.project_layout.display().to_string(),
                );
                output::print_kv(
                    "skeleton_source",
                    &config.paths.skeleton_source.display().to_string(),
                );
                output::print_kv("skeleton_dir", &config.paths.skeleton_dir);
                output::print_kv(
                    "templates_root",
                    &config.paths.templates_root.display().to_string(),
                );
                output::print_kv("log_level", &config.logging.level);
                output::print_kv("log_format", &config.logging.format);
            }
        },
        ConfigCommand::Check => {
            let services = super::build_services(config);

            let layout = services.projects.preflight()?;
            output::print_success(&format!(
                "Config template readable: {}",
                config.paths.config_template.display()
            ));
            output::print_success(&format!(
                "Project layout parses ({} folder nodes)",
                layout.node_count()
            ));
            output::print_success(&format!(
                "Skeleton source present: {}",
                config.paths.skeleton_source.display()
            ));

            if !config.paths.workspace_root.is_dir() {
                return Err(AppError::not_found(format!(
                    "Workspace root not found: {}",
                    config.paths.workspace_root.display()
                )));
            }
            output::print_success(&format!(
                "Workspace root present: {}",
                config.paths.workspace_root.display()
            ));
        }
    }

    Ok(())
}

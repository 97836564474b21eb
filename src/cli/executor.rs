//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings
///
/// Returns Ok without doing anything for a plain `serve` (or no command);
/// the caller starts the server in that case.
///
/// # Errors
/// Returns errors from command handlers or argument validation
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    cli.validate()
        .map_err(|message| AppError::BadRequest { message })?;

    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            ServeCommandHandler::new(settings).validate_only()
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            if let Some(steps) = rollback
                && *steps > 50
            {
                tracing::warn!(steps, "Rolling back a large number of migrations");
            }
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

/// Whether the parsed command should continue into server startup.
pub fn should_start_server(cli: &Cli) -> bool {
    matches!(
        cli.command,
        None | Some(Commands::Serve { dry_run: false, .. })
    )
}

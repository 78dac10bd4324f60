//! Schema migrate command implementation

use anyhow::{Context, Result};
use sc_host::{CommandMigrationRunner, MigrationRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::{child_exit_code, ExitCode};
use crate::context::ProjectContext;

/// Execute the schema migrate command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let runner = CommandMigrationRunner::new(project.legacy(), &project.config.migrate_command)
        .context("Invalid migrate_command")?;

    let status = runner
        .migrate()
        .await
        .with_context(|| format!("Failed to run '{}'", runner.command_line()))?;

    if !status.success() {
        eprintln!("Migration command failed ({status})");
        return Err(ExitCode(child_exit_code(status.code)).into());
    }
    Ok(())
}

//! Applying pending migrations through the migration framework
//!
//! Execution, ordering, and bookkeeping of applied versions belong to the
//! framework. This side only starts its command and reports how it exited.

use crate::context::LegacyContext;
use crate::error::{HostError, HostResult};
use async_trait::async_trait;
use std::fmt;

/// Exit status of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Applies all unapplied migration units in ascending version order.
#[async_trait]
pub trait MigrationRunner: Send + Sync {
    async fn migrate(&self) -> HostResult<RunStatus>;
}

/// Runs a configured command (by default `php bin/console
/// doctrine:migrations:migrate -n`) from the project root, with the
/// terminal attached so the framework's own progress is shown.
pub struct CommandMigrationRunner {
    ctx: LegacyContext,
    program: String,
    args: Vec<String>,
}

impl CommandMigrationRunner {
    /// `command` is the program followed by its arguments
    pub fn new(ctx: LegacyContext, command: &[String]) -> HostResult<Self> {
        let (program, args) = command.split_first().ok_or(HostError::EmptyCommand)?;
        if program.trim().is_empty() {
            return Err(HostError::EmptyCommand);
        }
        Ok(Self {
            ctx,
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// The command line, for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl MigrationRunner for CommandMigrationRunner {
    async fn migrate(&self) -> HostResult<RunStatus> {
        log::debug!(
            "Running '{}' in {}",
            self.command_line(),
            self.ctx.project_root.display()
        );
        let status = self
            .ctx
            .command(&self.program, &self.ctx.project_root)
            .args(&self.args)
            .status()
            .await
            .map_err(|e| HostError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        Ok(RunStatus {
            code: status.code(),
        })
    }
}

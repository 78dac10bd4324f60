//! Sources of pending schema SQL

use crate::context::LegacyContext;
use crate::error::{HostError, HostResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncReadExt;

/// Bootstrap script for the legacy dry-run repair, passed to `php -r`.
pub const REPAIR_DRY_RUN_SCRIPT: &str = include_str!("../assets/repair_dry_run.php");

/// Something that can report pending schema changes as raw SQL.
#[async_trait]
pub trait DiffSource: Send + Sync {
    /// Pending DDL as text, without applying it.
    async fn pending_sql(&self) -> HostResult<String>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// Runs the CRM's Quick Repair and Rebuild in dry-run mode.
pub struct PhpRepairDiffSource {
    ctx: LegacyContext,
}

impl PhpRepairDiffSource {
    pub fn new(ctx: LegacyContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl DiffSource for PhpRepairDiffSource {
    async fn pending_sql(&self) -> HostResult<String> {
        let legacy_dir = &self.ctx.legacy_dir;
        if !legacy_dir.is_dir() {
            return Err(HostError::Io {
                path: legacy_dir.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "legacy application directory not found",
                ),
            });
        }

        let program = &self.ctx.php_binary;
        log::debug!("Running dry-run repair with {program} in {}", legacy_dir.display());
        let output = self
            .ctx
            .command(program, legacy_dir)
            .arg("-r")
            .arg(REPAIR_DRY_RUN_SCRIPT)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| HostError::Spawn {
                program: program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(HostError::DiffFailed {
                program: program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| HostError::NonUtf8Output {
            program: program.clone(),
        })
    }

    fn describe(&self) -> String {
        format!("dry-run repair in {}", self.ctx.legacy_dir.display())
    }
}

/// Reads a previously captured dump; `-` means stdin.
pub struct FileDiffSource {
    path: PathBuf,
}

impl FileDiffSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

#[async_trait]
impl DiffSource for FileDiffSource {
    async fn pending_sql(&self) -> HostResult<String> {
        if self.is_stdin() {
            let mut sql = String::new();
            tokio::io::stdin()
                .read_to_string(&mut sql)
                .await
                .map_err(|e| HostError::Io {
                    path: "<stdin>".to_string(),
                    source: e,
                })?;
            return Ok(sql);
        }

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| HostError::Io {
                path: self.path.display().to_string(),
                source: e,
            })
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod tests;

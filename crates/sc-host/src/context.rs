//! Bootstrap context handed to CRM processes
//!
//! The legacy application must be started from its own directory and expects
//! a handful of process-level settings. Rather than changing this process's
//! working directory, every child is configured from a `LegacyContext`.

use sc_core::Config;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Narrowly scoped settings for invoking the legacy CRM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyContext {
    /// Project root; framework commands run from here
    pub project_root: PathBuf,
    /// Legacy application directory; repair scripts run from here
    pub legacy_dir: PathBuf,
    /// PHP interpreter
    pub php_binary: String,
    /// Extra environment for child processes
    pub env: BTreeMap<String, String>,
}

impl LegacyContext {
    /// Build the context for the project at `root`
    pub fn from_config(config: &Config, root: &Path) -> Self {
        Self {
            project_root: root.to_path_buf(),
            legacy_dir: config.legacy_dir_absolute(root),
            php_binary: config.php_binary.clone(),
            env: BTreeMap::new(),
        }
    }

    /// Add an environment variable for child processes
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// A command for `program` running in `dir` with the context environment
    pub(crate) fn command(&self, program: &str, dir: &Path) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(program);
        cmd.current_dir(dir).envs(&self.env).kill_on_drop(true);
        cmd
    }
}

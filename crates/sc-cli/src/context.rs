//! Runtime context for CLI commands

use anyhow::{Context, Result};
use sc_core::Config;
use sc_host::{DiffSource, FileDiffSource, FsMigrationStore, LegacyContext, PhpRepairDiffSource};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Loaded project configuration plus the directory it applies to
#[derive(Debug)]
pub(crate) struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the project directory and load its configuration
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&global.project_dir);
        let config = match &global.config {
            Some(path) => {
                Config::load(Path::new(path)).context("Failed to load configuration file")?
            }
            None => {
                Config::load_from_dir(&root).context("Failed to load project configuration")?
            }
        };
        Ok(Self { root, config })
    }

    /// Settings handed to every CRM child process
    pub(crate) fn legacy(&self) -> LegacyContext {
        LegacyContext::from_config(&self.config, &self.root)
    }

    /// The diff source selected by `--from-file`, or the live dry-run repair
    pub(crate) fn diff_source(&self, from_file: Option<&str>) -> Box<dyn DiffSource> {
        match from_file {
            Some(path) => Box::new(FileDiffSource::new(path)),
            None => Box::new(PhpRepairDiffSource::new(self.legacy())),
        }
    }

    pub(crate) fn migration_store(&self) -> FsMigrationStore {
        FsMigrationStore::new(self.config.migrations_dir_absolute(&self.root))
    }

    /// `path` relative to the project root when it lies inside it
    pub(crate) fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

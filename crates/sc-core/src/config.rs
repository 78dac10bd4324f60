//! Configuration types and parsing for suitectl.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names probed in the project directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["suitectl.yml", "suitectl.yaml"];

/// Project configuration from suitectl.yml
///
/// Every key is optional. A project without a config file behaves like a
/// stock SuiteCRM 8 checkout with Doctrine Migrations installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory of the legacy CRM application, relative to the project root
    #[serde(default = "default_legacy_dir")]
    pub legacy_dir: String,

    /// Directory where generated migration classes are written
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,

    /// PHP namespace of generated migration classes
    #[serde(default = "default_migration_namespace")]
    pub migration_namespace: String,

    /// PHP interpreter used to run the dry-run repair
    #[serde(default = "default_php_binary")]
    pub php_binary: String,

    /// Command (program followed by arguments) that applies pending migrations
    #[serde(default = "default_migrate_command")]
    pub migrate_command: Vec<String>,

    /// Where `config render` writes the legacy override by default
    #[serde(default = "default_config_override_path")]
    pub config_override_path: String,
}

fn default_legacy_dir() -> String {
    "public/legacy".to_string()
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_migration_namespace() -> String {
    "DoctrineMigrations".to_string()
}

fn default_php_binary() -> String {
    "php".to_string()
}

fn default_migrate_command() -> Vec<String> {
    ["php", "bin/console", "doctrine:migrations:migrate", "-n"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_config_override_path() -> String {
    "public/legacy/config_override.php".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legacy_dir: default_legacy_dir(),
            migrations_dir: default_migrations_dir(),
            migration_namespace: default_migration_namespace(),
            php_binary: default_php_binary(),
            migrate_command: default_migrate_command(),
            config_override_path: default_config_override_path(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    ///
    /// Looks for suitectl.yml or suitectl.yaml and falls back to the
    /// defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
        {
            Some(path) => Self::load(&path),
            None => {
                log::debug!(
                    "No suitectl.yml in {}, using defaults",
                    dir.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if !is_php_namespace(&self.migration_namespace) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "migration_namespace '{}' is not a PHP namespace (e.g. DoctrineMigrations or App\\Migrations)",
                    self.migration_namespace
                ),
            });
        }

        if self
            .migrate_command
            .first()
            .map_or(true, |program| program.trim().is_empty())
        {
            return Err(CoreError::ConfigInvalid {
                message: "migrate_command must name a program to run".to_string(),
            });
        }

        if self.php_binary.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "php_binary cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Absolute legacy application directory
    pub fn legacy_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.legacy_dir)
    }

    /// Absolute migrations directory
    pub fn migrations_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migrations_dir)
    }

    /// Absolute path of the rendered legacy override
    pub fn config_override_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.config_override_path)
    }
}

/// `Foo` or `Foo\Bar`, each segment a PHP label.
fn is_php_namespace(ns: &str) -> bool {
    !ns.is_empty()
        && ns.split('\\').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Filesystem storage of generated migration classes
//!
//! Units live as `<dir>/Version<YYYYMMDDHHMMSS>.php`, the layout Doctrine
//! Migrations discovers by default. Files are only ever created; a second
//! generation within the same second produces the same name and replaces
//! the earlier file.

use crate::error::{HostError, HostResult};
use sc_core::MigrationVersion;
use std::path::{Path, PathBuf};

/// A migration class found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMigration {
    pub version: MigrationVersion,
    pub path: PathBuf,
}

/// Where migration units are persisted.
pub trait MigrationStore {
    /// Write the unit for `version`, returning the file path
    fn persist(&self, version: &MigrationVersion, contents: &str) -> HostResult<PathBuf>;

    /// All stored units, oldest first
    fn list(&self) -> HostResult<Vec<StoredMigration>>;
}

/// Stores units as PHP files in a directory.
#[derive(Debug, Clone)]
pub struct FsMigrationStore {
    dir: PathBuf,
}

impl FsMigrationStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a unit for `version` is stored at
    pub fn path_for(&self, version: &MigrationVersion) -> PathBuf {
        self.dir.join(format!("{}.php", version.class_name()))
    }
}

impl MigrationStore for FsMigrationStore {
    fn persist(&self, version: &MigrationVersion, contents: &str) -> HostResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| HostError::Io {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let path = self.path_for(version);
        if path.exists() {
            log::warn!(
                "{} already exists (generated within the same second); overwriting",
                path.display()
            );
        }
        std::fs::write(&path, contents).map_err(|e| HostError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(path)
    }

    fn list(&self) -> HostResult<Vec<StoredMigration>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let pattern = format!(
            "{}/Version*.php",
            glob::Pattern::escape(&self.dir.display().to_string())
        );

        let mut found = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| HostError::Io {
                path: e.path().display().to_string(),
                source: e.into_error(),
            })?;
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match MigrationVersion::parse(stem) {
                Ok(version) => found.push(StoredMigration { version, path }),
                Err(e) => log::debug!("Ignoring {}: {e}", path.display()),
            }
        }
        found.sort_by(|a, b| a.version.cmp(&b.version));
        Ok(found)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

//! Migration version identifiers
//!
//! A version is the UTC generation time at second granularity, rendered as a
//! fixed-width `YYYYMMDDHHMMSS` string. Fixed width makes lexical order equal
//! to chronological order. Two versions taken within the same second are
//! equal; callers do not disambiguate them.

use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Prefix of generated migration class names.
pub const CLASS_PREFIX: &str = "Version";

const STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Timestamp-derived identifier of one migration unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MigrationVersion(String);

impl MigrationVersion {
    /// Version for the current UTC second
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Version for a given instant; sub-second precision is dropped
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.format(STAMP_FORMAT).to_string())
    }

    /// Parse `Version20240101120000` or bare `20240101120000`
    pub fn parse(value: &str) -> CoreResult<Self> {
        let digits = value.strip_prefix(CLASS_PREFIX).unwrap_or(value);
        let well_formed = digits.len() == 14
            && digits.bytes().all(|b| b.is_ascii_digit())
            && NaiveDateTime::parse_from_str(digits, STAMP_FORMAT).is_ok();
        if !well_formed {
            return Err(CoreError::InvalidVersion {
                value: value.to_string(),
            });
        }
        Ok(Self(digits.to_string()))
    }

    /// The `YYYYMMDDHHMMSS` stamp
    pub fn stamp(&self) -> &str {
        &self.0
    }

    /// Class (and file stem) name, e.g. `Version20240101120000`
    pub fn class_name(&self) -> String {
        format!("{CLASS_PREFIX}{}", self.0)
    }
}

impl fmt::Display for MigrationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CLASS_PREFIX}{}", self.0)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;

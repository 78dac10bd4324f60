//! sc-core - Core library for suitectl
//!
//! This crate provides the pieces shared by every suitectl component: the
//! project configuration file, prefixed/fallback environment lookup, the
//! legacy CRM configuration model derived from the environment, SQL
//! identifier newtypes, and migration version identifiers.

pub mod config;
pub mod env;
pub mod error;
pub mod identifiers;
pub mod legacy;
mod newtype_ident;
pub mod version;

pub use config::Config;
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{CoreError, CoreResult};
pub use identifiers::{ColumnName, IndexName, TableName};
pub use legacy::LegacyConfig;
pub use version::MigrationVersion;

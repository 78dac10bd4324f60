//! CLI command implementations

pub(crate) mod common;
pub(crate) mod config_render;
pub(crate) mod list;
pub(crate) mod make_migration;
pub(crate) mod migrate;
pub(crate) mod schema_diff;

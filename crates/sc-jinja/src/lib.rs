//! sc-jinja - Template layer for suitectl
//!
//! Renders a [`sc_sql::MigrationPlan`] into a Doctrine Migrations class whose
//! `up()` wraps each statement in its schema-manager guard, and renders a
//! [`sc_core::LegacyConfig`] into the CRM's `config_override.php`.

pub mod environment;
pub mod error;
pub mod filters;

pub use environment::{RenderedMigration, TemplateRenderer};
pub use error::{RenderError, RenderResult};

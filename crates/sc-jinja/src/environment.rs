//! Template environment for suitectl

use crate::error::RenderResult;
use crate::filters::{php_bool, php_string};
use minijinja::{context, AutoEscape, Environment};
use sc_core::LegacyConfig;
use sc_sql::MigrationPlan;

const MIGRATION_TEMPLATE: &str = "doctrine_migration.php";
const LEGACY_CONFIG_TEMPLATE: &str = "config_override.php";

/// A migration class ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMigration {
    /// Class name, also the file stem
    pub class_name: String,
    /// Full PHP source
    pub contents: String,
}

/// Renders the bundled PHP templates.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with the bundled templates registered
    pub fn new() -> RenderResult<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("php_string", php_string);
        env.add_filter("php_bool", php_bool);

        env.add_template(
            MIGRATION_TEMPLATE,
            include_str!("templates/doctrine_migration.php.j2"),
        )?;
        env.add_template(
            LEGACY_CONFIG_TEMPLATE,
            include_str!("templates/config_override.php.j2"),
        )?;

        Ok(Self { env })
    }

    /// Render `plan` as a Doctrine migration class in `namespace`
    pub fn render_migration(
        &self,
        plan: &MigrationPlan,
        namespace: &str,
    ) -> RenderResult<RenderedMigration> {
        let class_name = plan.version.class_name();
        let contents = self.env.get_template(MIGRATION_TEMPLATE)?.render(context! {
            namespace => namespace,
            class_name => &class_name,
            description => &plan.description,
            steps => &plan.steps,
        })?;
        log::debug!(
            "Rendered {} ({} steps, {} bytes)",
            class_name,
            plan.steps.len(),
            contents.len()
        );
        Ok(RenderedMigration {
            class_name,
            contents,
        })
    }

    /// Render the legacy `config_override.php`
    pub fn render_legacy_config(&self, config: &LegacyConfig) -> RenderResult<String> {
        Ok(self
            .env
            .get_template(LEGACY_CONFIG_TEMPLATE)?
            .render(context! { config => config })?)
    }
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;

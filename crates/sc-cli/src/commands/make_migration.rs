//! Schema make-migration command implementation

use anyhow::{Context, Result};
use sc_core::MigrationVersion;
use sc_host::{DiffSource, MigrationStore};
use sc_jinja::{RenderedMigration, TemplateRenderer};
use sc_sql::{plan_migration, GenerateOutcome, MigrationPlan, DEFAULT_DESCRIPTION};

use crate::cli::{GlobalArgs, MakeMigrationArgs};
use crate::context::ProjectContext;

pub(crate) const NO_CHANGES: &str = "No schema changes - no migration needed.";

/// A rendered migration and the plan it came from
#[derive(Debug)]
pub(crate) struct GeneratedMigration {
    pub plan: MigrationPlan,
    pub rendered: RenderedMigration,
}

/// Execute the schema make-migration command
pub async fn execute(args: &MakeMigrationArgs, global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let source = project.diff_source(args.from_file.as_deref());
    let renderer = TemplateRenderer::new().context("Failed to load migration templates")?;
    let description = args.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);

    let Some(generated) = generate(
        source.as_ref(),
        &renderer,
        &project.config.migration_namespace,
        description,
        MigrationVersion::now(),
    )
    .await?
    else {
        println!("{NO_CHANGES}");
        return Ok(());
    };

    if args.print {
        print!("{}", generated.rendered.contents);
        return Ok(());
    }

    let store = project.migration_store();
    let path = store
        .persist(&generated.plan.version, &generated.rendered.contents)
        .with_context(|| format!("Failed to write migration {}", generated.rendered.class_name))?;

    println!("Created migration: {}", project.display_path(&path));
    if global.verbose {
        println!(
            "  {} statement(s), {} guarded",
            generated.plan.steps.len(),
            generated.plan.guarded_count()
        );
    }
    Ok(())
}

/// Read the pending SQL and render it as a migration, `None` when there is
/// nothing to migrate.
pub(crate) async fn generate(
    source: &dyn DiffSource,
    renderer: &TemplateRenderer,
    namespace: &str,
    description: &str,
    version: MigrationVersion,
) -> Result<Option<GeneratedMigration>> {
    log::debug!("Reading pending schema changes from {}", source.describe());
    let sql = source
        .pending_sql()
        .await
        .with_context(|| format!("Failed to compute schema diff from {}", source.describe()))?;

    let plan = match plan_migration(&sql, description, version) {
        GenerateOutcome::NoChanges => return Ok(None),
        GenerateOutcome::Planned(plan) => plan,
    };

    let rendered = renderer
        .render_migration(&plan, namespace)
        .with_context(|| format!("Failed to render {}", plan.version.class_name()))?;
    Ok(Some(GeneratedMigration { plan, rendered }))
}

#[cfg(test)]
#[path = "make_migration_test.rs"]
mod tests;

//! Schema list command implementation

use anyhow::{Context, Result};
use sc_host::MigrationStore;

use crate::cli::GlobalArgs;
use crate::context::ProjectContext;

/// Execute the schema list command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let store = project.migration_store();
    let migrations = store
        .list()
        .with_context(|| format!("Failed to list {}", store.dir().display()))?;

    if migrations.is_empty() {
        println!("No migrations in {}", project.display_path(store.dir()));
        return Ok(());
    }

    for migration in &migrations {
        println!(
            "{}  {}",
            migration.version.stamp(),
            project.display_path(&migration.path)
        );
    }
    println!("\n{} migration(s)", migrations.len());
    Ok(())
}

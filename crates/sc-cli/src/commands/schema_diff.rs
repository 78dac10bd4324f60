//! Schema diff command implementation

use anyhow::{Context, Result};

use crate::cli::{DiffArgs, GlobalArgs};
use crate::context::ProjectContext;

pub(crate) const NO_CHANGES: &str = "No schema changes.";

/// Execute the schema diff command
pub async fn execute(args: &DiffArgs, global: &GlobalArgs) -> Result<()> {
    let project = ProjectContext::load(global)?;
    let source = project.diff_source(args.from_file.as_deref());
    log::debug!("Reading pending schema changes from {}", source.describe());

    let sql = source
        .pending_sql()
        .await
        .with_context(|| format!("Failed to compute schema diff from {}", source.describe()))?;

    println!("{}", diff_report(&sql));
    Ok(())
}

/// The pending SQL as shown to the user
pub(crate) fn diff_report(sql: &str) -> &str {
    match sql.trim() {
        "" => NO_CHANGES,
        trimmed => trimmed,
    }
}

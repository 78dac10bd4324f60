//! Migration plan assembly
//!
//! A plan is the language-neutral content of one migration unit: its version,
//! a one-line description, and one guarded step per extracted statement in
//! the original order. `sc-jinja` renders it into a migration class.

use crate::classify::{classify, StatementKind};
use crate::extract::extract_statements;
use crate::guard::Guard;
use crate::statement::DdlStatement;
use sc_core::MigrationVersion;
use serde::Serialize;

/// Description used when the operator does not supply one.
pub const DEFAULT_DESCRIPTION: &str = "Schema update";

/// One statement together with its shape and guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub statement: DdlStatement,
    pub kind: StatementKind,
    pub guard: Guard,
}

impl PlanStep {
    /// Classify `statement` and derive its guard.
    pub fn new(statement: DdlStatement) -> Self {
        let kind = classify(&statement);
        let guard = Guard::for_kind(&kind);
        Self {
            statement,
            kind,
            guard,
        }
    }
}

/// Content of one forward-only migration unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPlan {
    pub version: MigrationVersion,
    pub description: String,
    pub steps: Vec<PlanStep>,
}

impl MigrationPlan {
    /// Build a plan from already extracted statements.
    pub fn from_statements(
        version: MigrationVersion,
        description: &str,
        statements: Vec<DdlStatement>,
    ) -> Self {
        Self {
            version,
            description: normalize_description(description),
            steps: statements.into_iter().map(PlanStep::new).collect(),
        }
    }

    /// Number of steps that carry an existence guard
    pub fn guarded_count(&self) -> usize {
        self.steps.iter().filter(|s| s.guard.is_guarded()).count()
    }
}

/// Result of translating a diff into a migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The diff held no DDL; nothing should be written
    NoChanges,
    Planned(MigrationPlan),
}

/// Extract, classify, and guard every statement of `raw_sql`.
pub fn plan_migration(
    raw_sql: &str,
    description: &str,
    version: MigrationVersion,
) -> GenerateOutcome {
    let statements = extract_statements(raw_sql);
    if statements.is_empty() {
        return GenerateOutcome::NoChanges;
    }
    log::debug!(
        "Planning {} with {} statement(s)",
        version,
        statements.len()
    );
    GenerateOutcome::Planned(MigrationPlan::from_statements(
        version,
        description,
        statements,
    ))
}

/// Collapse all whitespace runs (including newlines) to single spaces.
fn normalize_description(description: &str) -> String {
    let collapsed = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;

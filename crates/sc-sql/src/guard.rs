//! Existence guards for generated migration steps
//!
//! A guard is evaluated when the migration is applied, against the live
//! schema, never at generation time. Index and column guards also pass when
//! the table does not exist yet: queued statements only run after the whole
//! `up()` body has been evaluated, so a table created by an earlier step of
//! the same unit is still missing while the guards are checked.

use crate::classify::StatementKind;
use sc_core::{ColumnName, IndexName, TableName};
use serde::Serialize;
use std::fmt;

/// Condition under which a step's statement is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Guard {
    /// Run only if `table` does not exist
    TableAbsent { table: TableName },
    /// Run if `table` is missing or lacks `index`
    IndexAbsent { table: TableName, index: IndexName },
    /// Run if `table` is missing or lacks `column`
    ColumnAbsent { table: TableName, column: ColumnName },
    /// Always run
    Unguarded,
}

impl Guard {
    /// The guard for a statement of shape `kind`.
    pub fn for_kind(kind: &StatementKind) -> Self {
        match kind {
            StatementKind::CreateTable { table } => Guard::TableAbsent {
                table: table.clone(),
            },
            StatementKind::CreateIndex { index, table } => Guard::IndexAbsent {
                table: table.clone(),
                index: index.clone(),
            },
            StatementKind::AddColumn { table, column } => Guard::ColumnAbsent {
                table: table.clone(),
                column: column.clone(),
            },
            StatementKind::Other => Guard::Unguarded,
        }
    }

    pub fn is_guarded(&self) -> bool {
        !matches!(self, Guard::Unguarded)
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::TableAbsent { table } => write!(f, "table {table} does not exist"),
            Guard::IndexAbsent { table, index } => {
                write!(f, "index {index} missing on table {table}")
            }
            Guard::ColumnAbsent { table, column } => {
                write!(f, "column {column} missing on table {table}")
            }
            Guard::Unguarded => f.write_str("always"),
        }
    }
}

//! sc-sql - DDL layer for suitectl
//!
//! This crate turns the raw SQL dump produced by the CRM's dry-run repair
//! into an ordered migration plan: the dump is split into individual DDL
//! statements, each statement is classified by shape with the sqlparser
//! tokenizer, and every shape maps to the existence guard that makes the
//! statement safe to re-run.

pub mod classify;
pub mod error;
pub mod extract;
pub mod guard;
pub mod plan;
pub mod statement;

pub use classify::{classify, StatementKind};
pub use error::{SqlError, SqlResult};
pub use extract::extract_statements;
pub use guard::Guard;
pub use plan::{plan_migration, GenerateOutcome, MigrationPlan, PlanStep, DEFAULT_DESCRIPTION};
pub use statement::DdlStatement;

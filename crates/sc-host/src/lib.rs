//! sc-host - Host boundary for suitectl
//!
//! Everything that talks to the outside world lives here: the dry-run repair
//! that produces the pending SQL, the directory that stores generated
//! migration classes, and the framework command that applies them. The CRM's
//! bootstrap state is carried explicitly in a [`LegacyContext`].

pub mod context;
pub mod diff;
pub mod error;
pub mod runner;
pub mod store;

pub use context::LegacyContext;
pub use diff::{DiffSource, FileDiffSource, PhpRepairDiffSource};
pub use error::{HostError, HostResult};
pub use runner::{CommandMigrationRunner, MigrationRunner, RunStatus};
pub use store::{FsMigrationStore, MigrationStore, StoredMigration};

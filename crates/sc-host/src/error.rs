//! Error types for sc-host

use thiserror::Error;

/// Errors raised at the host boundary
#[derive(Error, Debug)]
pub enum HostError {
    /// H001: The diff process exited unsuccessfully
    #[error("[H001] Schema diff failed ({program} exited with {status}): {stderr}")]
    DiffFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// H002: A child process could not be started
    #[error("[H002] Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// H003: IO error with path context
    #[error("[H003] IO error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// H004: Invalid glob pattern for the migrations directory
    #[error("[H004] Invalid migrations path pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// H005: Child process output was not UTF-8
    #[error("[H005] Output of '{program}' is not valid UTF-8")]
    NonUtf8Output { program: String },

    /// H006: A command line with no program
    #[error("[H006] Migration command is empty")]
    EmptyCommand,
}

/// Result type alias for HostError
pub type HostResult<T> = Result<T, HostError>;

//! Error types for sc-core

use thiserror::Error;

/// Core error type for suitectl
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Failed to parse the project configuration file
    #[error("[C001] Failed to parse config '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: An environment variable holds a value of the wrong shape
    #[error("[C003] Environment variable {var}='{value}' is not a valid {expected}")]
    InvalidEnvValue {
        var: String,
        value: String,
        expected: &'static str,
    },

    /// C004: Migration version string is malformed
    #[error("[C004] Invalid migration version '{value}': expected Version followed by YYYYMMDDHHMMSS")]
    InvalidVersion { value: String },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

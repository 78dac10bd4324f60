//! Error types for sc-jinja

use thiserror::Error;

/// Template errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Template failed to compile or render (R001)
    #[error("[R001] Template error in '{template}': {message}")]
    Template { template: String, message: String },
}

/// Result type alias for RenderError
pub type RenderResult<T> = Result<T, RenderError>;

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template {
            template: err.name().unwrap_or("<unknown>").to_string(),
            message: err.to_string(),
        }
    }
}

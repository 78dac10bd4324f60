//! Error types for sc-sql

use thiserror::Error;

/// DDL handling errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// Tokenizer rejected the statement (S001)
    #[error("[S001] SQL tokenize error at line {line}, column {column}: {message}")]
    TokenizeError {
        message: String,
        line: u64,
        column: u64,
    },

    /// Statement is empty after trimming (S002)
    #[error("[S002] SQL statement is empty")]
    EmptyStatement,
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;

impl From<sqlparser::tokenizer::TokenizerError> for SqlError {
    fn from(err: sqlparser::tokenizer::TokenizerError) -> Self {
        SqlError::TokenizeError {
            message: err.message,
            line: err.location.line,
            column: err.location.column,
        }
    }
}

//! A single extracted DDL statement

use crate::error::{SqlError, SqlResult};
use serde::Serialize;
use std::fmt;

/// One schema-altering SQL statement, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DdlStatement(String);

impl DdlStatement {
    /// Trim `sql` and wrap it, rejecting empty input.
    pub fn new(sql: impl AsRef<str>) -> SqlResult<Self> {
        let trimmed = sql.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SqlError::EmptyStatement);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Statement text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DdlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let stmt = DdlStatement::new("  DROP TABLE foo \n").unwrap();
        assert_eq!(stmt.as_str(), "DROP TABLE foo");
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(matches!(
            DdlStatement::new(" \n\t"),
            Err(SqlError::EmptyStatement)
        ));
    }
}

//! Strongly-typed SQL identifiers extracted from DDL statements.

use crate::newtype_ident::define_identifier;

define_identifier! {
    /// Name of a table targeted by a DDL statement.
    pub struct TableName;
}

define_identifier! {
    /// Name of an index created by a DDL statement.
    pub struct IndexName;
}

define_identifier! {
    /// Name of a column added by a DDL statement.
    pub struct ColumnName;
}

/// Non-empty and free of characters that need escaping in generated code.
pub(crate) fn is_plain_identifier(s: &str) -> bool {
    !s.is_empty()
        && !s
            .chars()
            .any(|c| matches!(c, '\'' | '"' | '`' | '\\' | '$') || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert_eq!(TableName::try_new("accounts").unwrap(), "accounts");
        assert_eq!(IndexName::try_new("idx_acc_name").unwrap().as_str(), "idx_acc_name");
        assert_eq!(ColumnName::try_new("jjwg_maps_lat_c").unwrap().to_string(), "jjwg_maps_lat_c");
    }

    #[test]
    fn test_accepts_spaces_and_unicode() {
        assert!(TableName::try_new("my table").is_some());
        assert!(TableName::try_new("účty").is_some());
    }

    #[test]
    fn test_rejects_empty_and_quoted() {
        assert!(TableName::try_new("").is_none());
        assert!(TableName::try_new("a'b").is_none());
        assert!(ColumnName::try_new("a\"b").is_none());
        assert!(IndexName::try_new("a\\b").is_none());
        assert!(IndexName::try_new("$x").is_none());
        assert!(IndexName::try_new("a\nb").is_none());
    }

    #[test]
    fn test_serializes_transparently() {
        let name = TableName::try_new("accounts").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"accounts\"");
    }
}

//! Classify DDL statements by shape
//!
//! Only the leading tokens matter. Shapes are tried in a fixed order and the
//! first match wins:
//!
//! 1. `CREATE TABLE [IF NOT EXISTS] <table>`
//! 2. `CREATE [UNIQUE] INDEX <index> ON <table>`
//! 3. `ALTER TABLE <table> ADD [COLUMN] <column> ...` (single column only)
//! 4. anything else
//!
//! Identifiers may be bare or back-quoted. For dotted names the last segment
//! is used, since schema introspection happens inside the target database.

use crate::error::SqlResult;
use crate::statement::DdlStatement;
use sc_core::{ColumnName, IndexName, TableName};
use serde::Serialize;
use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer};

/// Words that follow `ADD` in alterations that do not add a single column.
const NON_COLUMN_ADD_TARGETS: &[&str] = &[
    "CONSTRAINT",
    "INDEX",
    "KEY",
    "UNIQUE",
    "PRIMARY",
    "FOREIGN",
    "FULLTEXT",
    "SPATIAL",
    "CHECK",
    "PARTITION",
];

/// Shape of a DDL statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatementKind {
    CreateTable {
        table: TableName,
    },
    CreateIndex {
        index: IndexName,
        table: TableName,
    },
    AddColumn {
        table: TableName,
        column: ColumnName,
    },
    Other,
}

impl StatementKind {
    /// Short label for listings and logs
    pub fn label(&self) -> &'static str {
        match self {
            StatementKind::CreateTable { .. } => "create table",
            StatementKind::CreateIndex { .. } => "create index",
            StatementKind::AddColumn { .. } => "add column",
            StatementKind::Other => "other",
        }
    }
}

/// Classify `stmt`.
///
/// Statements the tokenizer cannot handle are `Other`; they still run, just
/// without a guard.
pub fn classify(stmt: &DdlStatement) -> StatementKind {
    match significant_tokens(stmt.as_str()) {
        Ok(tokens) => {
            let cursor = Cursor::new(&tokens);
            create_table(cursor)
                .or_else(|| create_index(cursor))
                .or_else(|| add_column(cursor))
                .unwrap_or(StatementKind::Other)
        }
        Err(e) => {
            log::warn!("Could not tokenize statement, running it unguarded: {e}");
            StatementKind::Other
        }
    }
}

/// Tokens with whitespace and comments removed.
fn significant_tokens(sql: &str) -> SqlResult<Vec<Token>> {
    let dialect = MySqlDialect {};
    let tokens = Tokenizer::new(&dialect, sql).tokenize()?;
    Ok(tokens
        .into_iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect())
}

fn create_table(mut c: Cursor<'_>) -> Option<StatementKind> {
    c.keyword("CREATE")?;
    c.keyword("TABLE")?;
    if c.keyword("IF").is_some() {
        c.keyword("NOT")?;
        c.keyword("EXISTS")?;
    }
    let table = TableName::try_new(c.object_name()?)?;
    Some(StatementKind::CreateTable { table })
}

fn create_index(mut c: Cursor<'_>) -> Option<StatementKind> {
    c.keyword("CREATE")?;
    let _ = c.keyword("UNIQUE");
    c.keyword("INDEX")?;
    let index = IndexName::try_new(c.ident()?)?;
    c.keyword("ON")?;
    let table = TableName::try_new(c.object_name()?)?;
    Some(StatementKind::CreateIndex { index, table })
}

fn add_column(mut c: Cursor<'_>) -> Option<StatementKind> {
    c.keyword("ALTER")?;
    c.keyword("TABLE")?;
    let table = TableName::try_new(c.object_name()?)?;
    c.keyword("ADD")?;
    let _ = c.keyword("COLUMN");
    if c.keyword("IF").is_some() {
        c.keyword("NOT")?;
        c.keyword("EXISTS")?;
    }
    if NON_COLUMN_ADD_TARGETS.iter().any(|kw| c.peek_keyword(kw)) {
        return None;
    }
    let column = ColumnName::try_new(c.ident()?)?;
    if c.has_top_level_comma() {
        return None;
    }
    Some(StatementKind::AddColumn { table, column })
}

/// Forward-only view over significant tokens.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    tokens: &'a [Token],
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let (first, rest) = self.tokens.split_first()?;
        self.tokens = rest;
        Some(first)
    }

    fn peek_keyword(&self, kw: &str) -> bool {
        matches!(
            self.tokens.first(),
            Some(Token::Word(w)) if w.quote_style.is_none() && w.value.eq_ignore_ascii_case(kw)
        )
    }

    /// Consume an unquoted `kw`.
    fn keyword(&mut self, kw: &str) -> Option<()> {
        if self.peek_keyword(kw) {
            self.bump();
            Some(())
        } else {
            None
        }
    }

    /// Consume a bare or back-quoted identifier.
    fn ident(&mut self) -> Option<String> {
        match self.tokens.first()? {
            Token::Word(w) if w.quote_style.is_none() || w.quote_style == Some('`') => {
                let value = w.value.clone();
                self.bump();
                Some(value)
            }
            _ => None,
        }
    }

    /// Consume `a`, `a.b`, ...; returns the last segment.
    fn object_name(&mut self) -> Option<String> {
        let mut name = self.ident()?;
        while matches!(self.tokens.first(), Some(Token::Period)) {
            self.bump();
            name = self.ident()?;
        }
        Some(name)
    }

    /// Whether a `,` appears outside parentheses in the remaining tokens.
    fn has_top_level_comma(&self) -> bool {
        let mut depth = 0usize;
        for token in self.tokens {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => depth = depth.saturating_sub(1),
                Token::Comma if depth == 0 => return true,
                _ => {}
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;

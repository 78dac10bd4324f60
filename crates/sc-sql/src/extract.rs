//! Split a raw repair dump into DDL statements
//!
//! The dry-run repair prints one statement per `;`-terminated line group,
//! interleaved with `/* ... */` banners and, occasionally, diagnostic
//! `SELECT`s. Statements are separated by a `;`
//! followed by whitespace containing a line break; a `;` in the middle of a
//! line does not end a statement.

use crate::statement::DdlStatement;
use regex::Regex;
use std::sync::OnceLock;

static STATEMENT_BOUNDARY: OnceLock<Regex> = OnceLock::new();
static NON_DDL_PREFIX: OnceLock<Regex> = OnceLock::new();

fn statement_boundary() -> &'static Regex {
    STATEMENT_BOUNDARY.get_or_init(|| Regex::new(r";\s*\n").expect("valid regex"))
}

/// `SELECT`s, block comments, and line comments
fn non_ddl_prefix() -> &'static Regex {
    NON_DDL_PREFIX.get_or_init(|| Regex::new(r"(?i)^(SELECT\s|/\*|--)").expect("valid regex"))
}

/// Extract the ordered DDL statements from `raw`.
///
/// Pieces that are empty or start with `SELECT`, `/*`, or `--` are dropped
/// whole, including any statement that follows a comment in the same piece.
/// An empty result means there is nothing to migrate.
pub fn extract_statements(raw: &str) -> Vec<DdlStatement> {
    let normalized = raw.replace('\r', "");

    statement_boundary()
        .split(&normalized)
        .filter_map(|piece| {
            let piece = piece.trim();
            if piece.is_empty() {
                return None;
            }
            if non_ddl_prefix().is_match(piece) {
                log::debug!("Skipping non-DDL piece: {piece}");
                return None;
            }
            let body = piece.strip_suffix(';').unwrap_or(piece).trim_end();
            DdlStatement::new(body).ok()
        })
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

//! Template filters for emitting PHP source

/// Escape `value` for a single-quoted PHP string literal.
///
/// Inside `'...'` PHP only interprets `\\` and `\'`, so those are the only
/// characters that need escaping; `$` and newlines are literal.
///
/// Usage in templates:
/// ```jinja
/// $this->addSql('{{ step.statement|php_string }}');
/// ```
pub fn php_string(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a boolean as a PHP literal.
pub fn php_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

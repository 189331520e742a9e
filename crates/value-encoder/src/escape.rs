//! Escaping for string literals embedded in rendered output.

/// Escape the five special characters of a GraphQL string literal:
/// backslash, double quote, newline, tab, and carriage return.
///
/// A single pass, so an already-present backslash is never re-escaped by a
/// later rule.
pub fn escape_special(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape and wrap in double quotes.
pub(crate) fn quoted(input: &str) -> String {
    format!("\"{}\"", escape_special(input))
}

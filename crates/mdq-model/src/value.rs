//! Multi-value codec.
//!
//! A cell may encode an ordered list of scalar values joined by the literal
//! `||` separator. Splitting and joining must round-trip exactly: for any
//! string without a lone `|`, `join_values(split_values(x)) == x`. A lone `|`
//! inside a component is a data defect handled by the separator rules, not by
//! this codec.

/// The reserved multi-value separator.
pub const SEPARATOR: &str = "||";

/// Split a cell's raw text into its logical components.
///
/// Empty components from leading, trailing, or doubled separators are
/// preserved here; deciding whether they are defects is up to the rules.
pub fn split_values(raw: &str) -> Vec<&str> {
    raw.split(SEPARATOR).collect()
}

/// Re-join components into a cell's raw text.
pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

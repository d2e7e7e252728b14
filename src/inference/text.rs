//! Plain-text fallback strategy.

use crate::types::{RawSource, Table};

/// Canonical column name for the fallback table.
pub const TEXT_COLUMN: &str = "text";

/// Load the source as unstructured text: a single `"text"` column with one
/// row per non-empty trimmed line. Always succeeds; this is the terminal
/// strategy.
pub fn parse_plain_text(source: &RawSource) -> Table {
    let rows = source
        .non_empty_lines()
        .map(|line| vec![Some(line.to_string())])
        .collect();
    Table::new(vec![TEXT_COLUMN.to_string()], rows)
}

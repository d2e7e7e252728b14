//! Key/value strategy.
//!
//! Recognizes flat records of `key: value` or `key=value` lines and collapses
//! them into a single-row table, one column per distinct key.

use crate::types::{RawSource, Table};

/// Try to parse the source as flat key/value records.
///
/// Rules:
///
/// - Lines are trimmed; empty lines are skipped.
/// - A line splits on its first `:`, else its first `=`. A non-empty line with
///   neither rejects the whole strategy immediately, even if later lines
///   would match.
/// - Keys and values are trimmed; a repeated key overwrites the earlier value.
/// - Accepted only if at least one pair was captured, so an empty file is a
///   rejection rather than an empty table.
///
/// Column order is first appearance of each key.
pub fn parse_key_value(source: &RawSource) -> Option<Table> {
    let mut columns: Vec<String> = Vec::new();
    let mut values: Vec<Option<String>> = Vec::new();

    for line in source.non_empty_lines() {
        let (key, value) = match line.split_once(':').or_else(|| line.split_once('=')) {
            Some(pair) => pair,
            None => return None,
        };
        let key = key.trim();
        let value = value.trim();

        match columns.iter().position(|c| c == key) {
            Some(idx) => values[idx] = Some(value.to_string()),
            None => {
                columns.push(key.to_string());
                values.push(Some(value.to_string()));
            }
        }
    }

    if columns.is_empty() {
        return None;
    }
    Some(Table::new(columns, vec![values]))
}

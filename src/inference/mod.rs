//! Table inference: raw text in, canonical [`Table`] out.
//!
//! Three strategies are tried in strict priority order, each fully before
//! falling to the next:
//!
//! 1. [`delimited`]: delimiter-separated data (comma, semicolon, tab, pipe)
//! 2. [`keyvalue`]: flat `key: value` / `key=value` records
//! 3. [`text`]: one `"text"` column, one row per non-empty line
//!
//! The last strategy always succeeds, so [`infer`] has no failure mode: any
//! internal parse error just rejects that candidate and falls through.
//!
//! ```rust
//! use text_table_convert::inference::infer;
//! use text_table_convert::types::RawSource;
//!
//! let table = infer(&RawSource::from_text("a,b,c\n1,2,3\n"));
//! assert_eq!(table.columns, vec!["a", "b", "c"]);
//! assert_eq!(table.cell(0, 1), Some("2"));
//! ```

pub mod delimited;
pub mod keyvalue;
pub mod text;

use crate::types::{RawSource, Table};

pub use delimited::{CANDIDATE_DELIMITERS, Delimiter};

/// Which strategy produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Delimiter-separated data, tagged with the accepted delimiter.
    Delimited(Delimiter),
    /// Flat key/value records collapsed into a single row.
    KeyValue,
    /// Unstructured text fallback (single `"text"` column).
    PlainText,
}

/// Result of [`infer_detailed`]: the table plus how it was derived.
///
/// `skipped_rows` counts delimited records dropped for having the wrong field
/// count (or being unreadable); it is always zero for the other strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    /// The inferred table.
    pub table: Table,
    /// Strategy that accepted.
    pub strategy: Strategy,
    /// Malformed delimited records skipped during best-effort parsing.
    pub skipped_rows: usize,
}

impl Inference {
    /// Summary of this inference, suitable for observer reporting.
    pub fn stats(&self) -> InferenceStats {
        InferenceStats {
            strategy: self.strategy,
            rows: self.table.row_count(),
            columns: self.table.column_count(),
            skipped_rows: self.skipped_rows,
        }
    }
}

/// Minimal stats describing an inference outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceStats {
    /// Strategy that accepted.
    pub strategy: Strategy,
    /// Rows in the inferred table.
    pub rows: usize,
    /// Columns in the inferred table.
    pub columns: usize,
    /// Malformed delimited records skipped during best-effort parsing.
    pub skipped_rows: usize,
}

/// Infer a canonical table from raw text. Never fails.
pub fn infer(source: &RawSource) -> Table {
    infer_detailed(source).table
}

/// Infer a canonical table and report which strategy accepted it.
pub fn infer_detailed(source: &RawSource) -> Inference {
    if let Some((table, delimiter, skipped_rows)) = delimited::parse_delimited(source) {
        return Inference {
            table,
            strategy: Strategy::Delimited(delimiter),
            skipped_rows,
        };
    }

    if let Some(table) = keyvalue::parse_key_value(source) {
        return Inference {
            table,
            strategy: Strategy::KeyValue,
            skipped_rows: 0,
        };
    }

    Inference {
        table: text::parse_plain_text(source),
        strategy: Strategy::PlainText,
        skipped_rows: 0,
    }
}

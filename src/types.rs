//! Core data model types for inference and serialization.
//!
//! Inference turns a [`RawSource`] into an in-memory [`Table`]; serialization
//! renders a [`Table`] into an output format. The two sides share nothing else.

use std::fs;
use std::path::Path;

use crate::error::ConvertResult;

/// Input size cap applied by the path-based entrypoints in [`crate::convert`].
///
/// The inference engine itself never checks this; it stays correct (if slow)
/// for larger inputs when callers bypass the cap.
pub const MAX_INPUT_BYTES: u64 = 25 * 1024 * 1024;

/// Decoded text input for the inference engine.
///
/// Construction is best-effort: undecodable bytes are replaced during UTF-8
/// decoding, never reported as errors. Only actual I/O can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
    text: String,
}

impl RawSource {
    /// Wrap already-decoded text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode raw bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    /// Read a file and decode it, replacing invalid UTF-8 sequences.
    pub fn from_path(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// The full decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over lines in source order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Iterate over trimmed, non-empty lines in source order.
    pub fn non_empty_lines(&self) -> impl Iterator<Item = &str> {
        self.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Canonical in-memory table produced by inference.
///
/// `columns` holds unique names in first-seen order. Rows are stored row-major
/// and always have the same width as `columns`; `None` marks an absent cell
/// (distinct from an empty string, and never the literal word "null" unless
/// the source contained it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Ordered, unique column names.
    pub columns: Vec<String>,
    /// Row-major cell storage; each row has `columns.len()` entries.
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create a table from columns and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = columns.len();
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == width,
                "row {i} has {} cells but table has {width} columns",
                row.len()
            );
        }
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at `(row, col)`, or `None` for absent cells and
    /// out-of-range indexes.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }
}

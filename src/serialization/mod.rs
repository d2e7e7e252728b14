//! Table serialization: canonical [`Table`] in, bytes + filename out.
//!
//! [`serialize`] is a pure function of its inputs; calling it twice with the
//! same table and kind produces byte-identical output. Format-specific
//! implementations live under:
//!
//! - [`csv`]
//! - [`xlsx`]
//! - [`json`]
//! - [`xml`]

pub mod csv;
pub mod json;
pub mod xlsx;
pub mod xml;

use crate::error::ConvertResult;
use crate::types::Table;

/// Supported output formats. Closed set; there is no "unknown kind" at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Comma-separated values.
    Csv,
    /// Single-sheet spreadsheet workbook.
    Xlsx,
    /// Array-of-objects JSON.
    Json,
    /// `<rows><row>...</row></rows>` XML.
    Xml,
}

impl OutputKind {
    /// Map a user-facing selection label (e.g. a button's callback data) to a
    /// kind, case-insensitively. Anything else, including "cancel", is the
    /// delivery layer's concern and returns `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// File extension for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Suggested output file name.
    pub fn filename(self) -> String {
        format!("converted.{}", self.extension())
    }
}

/// A serialized table: the bytes plus a suggested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Serialized output.
    pub bytes: Vec<u8>,
    /// Suggested file name (e.g. `converted.csv`).
    pub filename: String,
}

/// Serialize a table into the requested output format.
///
/// ```rust
/// use text_table_convert::serialization::{serialize, OutputKind};
/// use text_table_convert::types::Table;
///
/// let table = Table::new(
///     vec!["a".into(), "b".into()],
///     vec![vec![Some("1".into()), None]],
/// );
/// let export = serialize(&table, OutputKind::Csv).unwrap();
/// assert_eq!(export.filename, "converted.csv");
/// assert_eq!(export.bytes, b"a,b\n1,\n");
/// ```
pub fn serialize(table: &Table, kind: OutputKind) -> ConvertResult<Export> {
    let bytes = match kind {
        OutputKind::Csv => csv::to_csv(table)?,
        OutputKind::Xlsx => xlsx::to_xlsx(table)?,
        OutputKind::Json => json::to_json(table)?,
        OutputKind::Xml => xml::to_xml(table),
    };
    Ok(Export {
        bytes,
        filename: kind.filename(),
    })
}

//! `text-table-convert` is a small library for turning plain text files of
//! unknown layout into an in-memory [`types::Table`], and serializing that
//! table to CSV, XLSX, JSON, or XML.
//!
//! ## How inference works
//!
//! [`inference::infer`] tries three strategies in strict priority order and
//! never fails:
//!
//! 1. **Delimited**: samples the first 20 non-empty lines for a candidate
//!    delimiter (comma, semicolon, tab, pipe, in that order) and parses the
//!    whole file with it, skipping malformed rows. Accepted only if the result
//!    has more than one column.
//! 2. **Key/value**: `key: value` / `key=value` lines collapse into a
//!    single-row table, one column per distinct key (last write wins). A line
//!    with neither separator rejects the strategy outright.
//! 3. **Plain text**: one `"text"` column, one row per non-empty line. Always
//!    succeeds.
//!
//! ## Quick example: infer then serialize
//!
//! ```rust
//! use text_table_convert::inference::infer;
//! use text_table_convert::serialization::{serialize, OutputKind};
//! use text_table_convert::types::RawSource;
//!
//! # fn main() -> Result<(), text_table_convert::ConvertError> {
//! let source = RawSource::from_text("name,score\nAda,98.5\nGrace,91.0\n");
//! let table = infer(&source);
//! assert_eq!(table.columns, vec!["name", "score"]);
//!
//! let export = serialize(&table, OutputKind::Json)?;
//! assert_eq!(export.filename, "converted.json");
//! # Ok(())
//! # }
//! ```
//!
//! ## Path-based conversion with validation
//!
//! [`convert::infer_from_path`] and [`convert::convert_from_path`] add the
//! delivery-side policy around the core: a size cap (25 MiB by default), an
//! optional extension allow-list, and observer reporting.
//!
//! ```no_run
//! use text_table_convert::convert::{convert_from_path, ConversionOptions};
//! use text_table_convert::serialization::OutputKind;
//!
//! # fn main() -> Result<(), text_table_convert::ConvertError> {
//! let opts = ConversionOptions {
//!     allowed_extensions: Some(vec!["txt".to_string()]),
//!     ..Default::default()
//! };
//! let export = convert_from_path("input.txt", OutputKind::Csv, &opts)?;
//! std::fs::write(&export.filename, &export.bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Two-phase conversion and sessions
//!
//! Delivery layers that infer first and serialize on a later request (e.g. a
//! chat bot offering format buttons) keep the pending table in a
//! [`session::SessionStore`] keyed by their own session id; the core never
//! manages that lifetime.
//!
//! ## Modules
//!
//! - [`inference`]: the format-inference engine and its strategies
//! - [`serialization`]: output formats and the serializer
//! - [`convert`]: path-based entrypoints with validation and observability
//! - [`session`]: explicit pending-table store for delivery layers
//! - [`observability`]: observer trait and stderr/file implementations
//! - [`types`]: raw source + canonical table types
//! - [`error`]: error types used across conversion

pub mod convert;
pub mod error;
pub mod inference;
pub mod observability;
pub mod serialization;
pub mod session;
pub mod types;

pub use error::{ConvertError, ConvertResult};
pub use inference::{Inference, Strategy, infer, infer_detailed};
pub use serialization::{Export, OutputKind, serialize};
pub use types::{MAX_INPUT_BYTES, RawSource, Table};

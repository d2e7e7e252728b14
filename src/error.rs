use thiserror::Error;

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error type returned by conversion functions.
///
/// Inference itself never fails (every input falls through to the plain-text
/// strategy), so this enum only covers reading input files, input validation
/// in [`crate::convert`], and the serializer backends.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// XLSX serialization error.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Input file exceeds the configured size cap.
    #[error("input too large: {size} bytes (max {max})")]
    InputTooLarge { size: u64, max: u64 },

    /// Input file extension is not on the configured allow-list.
    #[error("unsupported extension: '{extension}'")]
    UnsupportedExtension { extension: String },
}

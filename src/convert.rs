//! Unified conversion entrypoints.
//!
//! The inference engine and the serializer are deliberately decoupled; this
//! module supplies the glue a delivery layer needs around them:
//!
//! - input validation (size cap, optional extension allow-list) before
//!   inference is invoked
//! - path-based reading with best-effort decoding
//! - observer reporting for successes, failures, and alerts
//!
//! Two-phase callers (infer now, serialize on a later request) use
//! [`infer_from_path`] and hold the resulting table — typically in a
//! [`crate::session::SessionStore`] — until a format is chosen. One-shot
//! callers use [`convert_from_path`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ConvertError, ConvertResult};
use crate::inference::{self, Inference};
use crate::observability::{ConversionContext, ConversionObserver, ConversionSeverity};
use crate::serialization::{self, Export, OutputKind};
use crate::types::{MAX_INPUT_BYTES, RawSource};

/// Options controlling unified conversion behavior.
///
/// Use [`Default`] for common cases: a 25 MiB size cap, any file extension,
/// no observer.
#[derive(Clone)]
pub struct ConversionOptions {
    /// Reject inputs larger than this many bytes. `None` disables the check.
    pub max_input_bytes: Option<u64>,
    /// If set, reject inputs whose extension (case-insensitive, without the
    /// dot) is not in this list. `None` accepts any path.
    pub allowed_extensions: Option<Vec<String>>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ConversionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ConversionSeverity,
}

impl fmt::Debug for ConversionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionOptions")
            .field("max_input_bytes", &self.max_input_bytes)
            .field("allowed_extensions", &self.allowed_extensions)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(MAX_INPUT_BYTES),
            allowed_extensions: None,
            observer: None,
            alert_at_or_above: ConversionSeverity::Critical,
        }
    }
}

/// Serialize an already-inferred table, without any I/O or validation.
///
/// Thin convenience over [`serialization::serialize`] for callers that built
/// the [`RawSource`] themselves:
///
/// ```rust
/// use text_table_convert::convert::convert;
/// use text_table_convert::serialization::OutputKind;
/// use text_table_convert::types::RawSource;
///
/// let export = convert(&RawSource::from_text("name: Alice\nage: 30\n"), OutputKind::Json).unwrap();
/// assert_eq!(export.filename, "converted.json");
/// ```
pub fn convert(source: &RawSource, kind: OutputKind) -> ConvertResult<Export> {
    serialization::serialize(&inference::infer(source), kind)
}

/// Validate and read a file, then infer a table from it.
///
/// Validation happens before any content is read: the extension allow-list
/// first, then the size cap (via metadata). Inference itself cannot fail;
/// every error from this function is validation or I/O.
///
/// When an observer is configured, reports `on_inference` on success and
/// `on_failure` (plus `on_alert` at/above the threshold) otherwise.
pub fn infer_from_path(path: impl AsRef<Path>, options: &ConversionOptions) -> ConvertResult<Inference> {
    let path = path.as_ref();
    let ctx = ConversionContext {
        path: Some(path.to_path_buf()),
    };

    let result = validated_source(path, options).map(|source| inference::infer_detailed(&source));

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(inference) => obs.on_inference(&ctx, inference.stats()),
            Err(e) => report_failure(obs.as_ref(), &ctx, e, options),
        }
    }

    result
}

/// One-shot conversion: validate, read, infer, and serialize in one call.
///
/// When an observer is configured, reports `on_inference`, then `on_export`
/// on success; failures are reported as in [`infer_from_path`].
pub fn convert_from_path(
    path: impl AsRef<Path>,
    kind: OutputKind,
    options: &ConversionOptions,
) -> ConvertResult<Export> {
    let path = path.as_ref();
    let inference = infer_from_path(path, options)?;

    let ctx = ConversionContext {
        path: Some(path.to_path_buf()),
    };
    let result = serialization::serialize(&inference.table, kind);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(export) => obs.on_export(&ctx, kind, export.bytes.len()),
            Err(e) => report_failure(obs.as_ref(), &ctx, e, options),
        }
    }

    result
}

fn validated_source(path: &Path, options: &ConversionOptions) -> ConvertResult<RawSource> {
    if let Some(allowed) = options.allowed_extensions.as_deref() {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if !allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)) {
            return Err(ConvertError::UnsupportedExtension {
                extension: ext.to_string(),
            });
        }
    }

    if let Some(max) = options.max_input_bytes {
        let size = fs::metadata(path)?.len();
        if size > max {
            return Err(ConvertError::InputTooLarge { size, max });
        }
    }

    RawSource::from_path(path)
}

fn report_failure(
    obs: &dyn ConversionObserver,
    ctx: &ConversionContext,
    error: &ConvertError,
    options: &ConversionOptions,
) {
    let severity = severity_for_error(error);
    obs.on_failure(ctx, severity, error);
    if severity >= options.alert_at_or_above {
        obs.on_alert(ctx, severity, error);
    }
}

fn severity_for_error(e: &ConvertError) -> ConversionSeverity {
    match e {
        ConvertError::Io(_) => ConversionSeverity::Critical,
        ConvertError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => ConversionSeverity::Critical,
            _ => ConversionSeverity::Error,
        },
        ConvertError::Json(_) | ConvertError::Xlsx(_) => ConversionSeverity::Error,
        ConvertError::InputTooLarge { .. } | ConvertError::UnsupportedExtension { .. } => {
            ConversionSeverity::Error
        }
    }
}

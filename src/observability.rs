use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConvertError;
use crate::inference::InferenceStats;
use crate::serialization::OutputKind;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConversionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about a conversion attempt.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    /// Input path, when the conversion was path-based.
    pub path: Option<PathBuf>,
}

/// Observer interface for conversion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait ConversionObserver: Send + Sync {
    /// Called when inference completes (inference itself never fails).
    fn on_inference(&self, _ctx: &ConversionContext, _stats: InferenceStats) {}

    /// Called when a table was serialized successfully.
    fn on_export(&self, _ctx: &ConversionContext, _kind: OutputKind, _bytes: usize) {}

    /// Called when reading, validating, or serializing fails.
    fn on_failure(&self, _ctx: &ConversionContext, _severity: ConversionSeverity, _error: &ConvertError) {}

    /// Called when a failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ConversionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ConversionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ConversionObserver for CompositeObserver {
    fn on_inference(&self, ctx: &ConversionContext, stats: InferenceStats) {
        for o in &self.observers {
            o.on_inference(ctx, stats);
        }
    }

    fn on_export(&self, ctx: &ConversionContext, kind: OutputKind, bytes: usize) {
        for o in &self.observers {
            o.on_export(ctx, kind, bytes);
        }
    }

    fn on_failure(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

fn display_path(ctx: &ConversionContext) -> String {
    ctx.path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<in-memory>".to_string())
}

/// Logs conversion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ConversionObserver for StdErrObserver {
    fn on_inference(&self, ctx: &ConversionContext, stats: InferenceStats) {
        eprintln!(
            "[convert][inferred] path={} strategy={:?} rows={} columns={} skipped={}",
            display_path(ctx),
            stats.strategy,
            stats.rows,
            stats.columns,
            stats.skipped_rows
        );
    }

    fn on_export(&self, ctx: &ConversionContext, kind: OutputKind, bytes: usize) {
        eprintln!(
            "[convert][exported] path={} kind={kind:?} bytes={bytes}",
            display_path(ctx)
        );
    }

    fn on_failure(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        eprintln!(
            "[convert][{severity:?}] path={} err={error}",
            display_path(ctx)
        );
    }

    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        eprintln!(
            "[ALERT][convert][{severity:?}] path={} err={error}",
            display_path(ctx)
        );
    }
}

/// Appends conversion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ConversionObserver for FileObserver {
    fn on_inference(&self, ctx: &ConversionContext, stats: InferenceStats) {
        self.append_line(&format!(
            "{} inferred path={} strategy={:?} rows={} columns={} skipped={}",
            unix_ts(),
            display_path(ctx),
            stats.strategy,
            stats.rows,
            stats.columns,
            stats.skipped_rows
        ));
    }

    fn on_export(&self, ctx: &ConversionContext, kind: OutputKind, bytes: usize) {
        self.append_line(&format!(
            "{} exported path={} kind={kind:?} bytes={bytes}",
            unix_ts(),
            display_path(ctx)
        ));
    }

    fn on_failure(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        self.append_line(&format!(
            "{} fail severity={severity:?} path={} err={error}",
            unix_ts(),
            display_path(ctx)
        ));
    }

    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConvertError) {
        self.append_line(&format!(
            "{} ALERT severity={severity:?} path={} err={error}",
            unix_ts(),
            display_path(ctx)
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

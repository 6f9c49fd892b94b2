//! Injectable trace sink for the scanner's diagnostic output.
//!
//! Tracing is observation only: it must never influence which warnings are
//! produced. The default sink discards everything; `--verbose` swaps in the
//! stderr sink.

use colored::Colorize;

/// Receiver for scanner trace events.
///
/// Implementations must be `Sync` because files are scanned in parallel and
/// share one sink.
pub trait TraceSink: Sync {
    fn event(&self, message: &str);
}

/// Discards all trace events. The default.
pub struct NullSink;

impl TraceSink for NullSink {
    fn event(&self, _message: &str) {}
}

/// Writes trace events to stderr, dimmed so they stand apart from
/// diagnostics.
pub struct StderrSink;

impl TraceSink for StderrSink {
    fn event(&self, message: &str) {
        eprintln!("{}", format!("trace: {}", message).dimmed());
    }
}

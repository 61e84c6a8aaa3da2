//! Per-task failure reporting.
//!
//! A task that fails hands a [`FailedRequest`] to the dispatcher's
//! [`FailureReporter`] and then terminates normally. The default reporter
//! prints one line per failure to standard error:
//!
//! ```text
//! Failed to open http://127.0.0.1:7878/sleep: error sending request: ...
//! ```

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// A request that did not complete, as reported by its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRequest {
    /// The URL the task tried to GET.
    pub url: String,
    /// Human-readable description of the failure.
    pub error: String,
}

impl fmt::Display for FailedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to open {}: {}", self.url, self.error)
    }
}

/// Sink for failure reports.
///
/// Called concurrently from every failing task, so implementations must be
/// safe to share between threads.
pub trait FailureReporter: Send + Sync {
    /// Records one failed request.
    fn report(&self, failure: &FailedRequest);
}

/// Writes each failure as a line on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl FailureReporter for StderrReporter {
    fn report(&self, failure: &FailedRequest) {
        // Holding the lock keeps concurrent lines from interleaving.
        write_line(std::io::stderr().lock(), failure);
    }
}

/// Writes the report line to `out`.
///
/// A write error is dropped: stderr is the only channel the line could go to,
/// and a reporting task must still terminate normally.
fn write_line(mut out: impl Write, failure: &FailedRequest) {
    let _ = writeln!(out, "{failure}");
}

/// Keeps failures in memory, in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    failures: Arc<Mutex<Vec<FailedRequest>>>,
}

impl MemoryReporter {
    /// Creates an empty reporter. Clones share the same storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every failure reported so far.
    pub fn failures(&self) -> Vec<FailedRequest> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The report lines, formatted exactly as [`StderrReporter`] prints them.
    pub fn lines(&self) -> Vec<String> {
        self.failures().iter().map(ToString::to_string).collect()
    }
}

impl FailureReporter for MemoryReporter {
    fn report(&self, failure: &FailedRequest) {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(failure.clone());
    }
}

/// A reporter backed by a closure.
pub struct FnReporter<F> {
    f: F,
}

impl<F> FnReporter<F>
where
    F: Fn(&FailedRequest) + Send + Sync,
{
    /// Wraps `f` as a reporter.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> FailureReporter for FnReporter<F>
where
    F: Fn(&FailedRequest) + Send + Sync,
{
    fn report(&self, failure: &FailedRequest) {
        (self.f)(failure)
    }
}

//! Diagnostic sinks
//!
//! Where the responder sends diagnostic records. Passed in explicitly so
//! callers can capture records without installing a global subscriber.

use std::sync::{Arc, Mutex};

/// Receives diagnostic records about server errors and encoding failures.
pub trait DiagnosticSink: Send + Sync {
    /// Records a single diagnostic message.
    fn record(&self, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn record(&self, message: &str) {
        (**self).record(message)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn record(&self, message: &str) {
        (**self).record(message)
    }
}

/// Forwards records to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Keeps records in memory, in the order they were emitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, message: &str) {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records.push(message.to_string());
    }
}

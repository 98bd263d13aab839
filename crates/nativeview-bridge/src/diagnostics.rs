// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostic side channel.
//
// Operations return a safe default to their caller and report why on a
// `DiagnosticSink`. Control flow never depends on the sink.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use nativeview_core::human_errors::{human_hint, DiagnosticHint};
use nativeview_core::{NativeViewError, Operation, ViewTag};

/// One reported failure.
#[derive(Debug)]
pub struct Diagnostic {
    pub operation: Operation,
    pub error: NativeViewError,
    pub at: DateTime<Utc>,
}

impl Diagnostic {
    pub fn new(operation: Operation, error: NativeViewError) -> Self {
        Self {
            operation,
            error,
            at: Utc::now(),
        }
    }

    /// Tag the failing call was made with, when one was resolved.
    pub fn tag(&self) -> Option<ViewTag> {
        self.error.tag()
    }

    pub fn hint(&self) -> DiagnosticHint {
        human_hint(&self.error)
    }
}

/// Receiver for diagnostics. Must be callable from any runtime thread.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: one `warn!` per diagnostic.
#[derive(Debug, Clone)]
pub struct TracingSink {
    prefix: String,
}

impl TracingSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        let hint = diagnostic.hint();
        tracing::warn!(
            operation = %diagnostic.operation,
            tag = diagnostic.tag().map(|t| t.0),
            hint = %hint.suggestion,
            "{} {}",
            self.prefix,
            diagnostic.error
        );
    }
}

/// Keeps every diagnostic in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain everything recorded so far, oldest first.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn recording_sink_drains_in_order() {
        let sink = RecordingSink::new();
        sink.report(Diagnostic::new(
            Operation::Measure,
            NativeViewError::MetricsNotComputed { tag: ViewTag(1) },
        ));
        sink.report(Diagnostic::new(
            Operation::Measure,
            NativeViewError::ViewFlattened { tag: ViewTag(2) },
        ));
        assert_eq!(sink.len(), 2);

        let drained = sink.take();
        assert_eq!(drained[0].tag(), Some(ViewTag(1)));
        assert_eq!(drained[1].tag(), Some(ViewTag(2)));
        assert!(sink.is_empty());
    }

    #[test]
    #[traced_test]
    fn tracing_sink_logs_prefix_and_tag() {
        let sink = TracingSink::new("[test-bridge]");
        sink.report(Diagnostic::new(
            Operation::Measure,
            NativeViewError::InvalidResponse { tag: ViewTag(99) },
        ));

        assert!(logs_contain("[test-bridge]"));
        assert!(logs_contain("tag 99 returned an invalid measurement response"));
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Actionable hints for bridge failures.
//
// The error message says what happened; the hint says what the app developer
// should change, and whether the failure is a bug in the calling code or just
// a view that isn't measurable right now.

use crate::error::NativeViewError;
use crate::types::Operation;

/// How seriously a failure should be taken by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// Expected from time to time (off-screen view, first frame). Retry later.
    Transient,
    /// The calling code is wrong and will keep failing until it changes.
    UsageError,
    /// The native layer broke its own contract.
    HostBug,
    /// Not a bridge failure (configuration, I/O).
    Setup,
}

/// A short suggestion attached to a failure.
#[derive(Debug, Clone)]
pub struct DiagnosticHint {
    pub suggestion: String,
    pub kind: HintKind,
}

/// Map a `NativeViewError` to the hint shown next to its diagnostic.
pub fn human_hint(err: &NativeViewError) -> DiagnosticHint {
    match err {
        NativeViewError::UnsupportedPlatform { .. } => DiagnosticHint {
            suggestion: "Run on a native target, or skip this call when the platform is not native."
                .into(),
            kind: HintKind::UsageError,
        },

        NativeViewError::OutsideWorklet { operation } => match operation {
            Operation::Measure => DiagnosticHint {
                suggestion: "Only measure from the worklet runtime, after render has completed."
                    .into(),
                kind: HintKind::Transient,
            },
            _ => DiagnosticHint {
                suggestion: format!("Move the {operation} call into a worklet."),
                kind: HintKind::UsageError,
            },
        },

        NativeViewError::ViewNotRendered { .. } | NativeViewError::MetricsNotComputed { .. } => {
            DiagnosticHint {
                suggestion: "Measure again once the view is mounted and laid out.".into(),
                kind: HintKind::Transient,
            }
        }

        NativeViewError::InvalidResponse { .. } => DiagnosticHint {
            suggestion: "The native renderer returned a malformed measurement; report it upstream."
                .into(),
            kind: HintKind::HostBug,
        },

        NativeViewError::ViewFlattened { .. } => DiagnosticHint {
            suggestion: "Mark the view as non-collapsable so the renderer keeps it in the native tree."
                .into(),
            kind: HintKind::UsageError,
        },

        NativeViewError::Config(detail) => DiagnosticHint {
            suggestion: format!("Fix the bridge configuration ({detail})."),
            kind: HintKind::Setup,
        },

        NativeViewError::Io(e) => DiagnosticHint {
            suggestion: format!("Check that the configuration file exists and is readable ({e})."),
            kind: HintKind::Setup,
        },

        NativeViewError::Serialization(e) => DiagnosticHint {
            suggestion: format!("The configuration file is not valid JSON ({e})."),
            kind: HintKind::Setup,
        },
    }
}

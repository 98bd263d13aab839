// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Context classifier: may this call touch a native primitive?

use nativeview_core::error::{NativeViewError, Result};
use nativeview_core::{ExecutionContext, Operation};

/// Platform capability, fixed at construction, combined with the caller's
/// execution context at the point of use.
#[derive(Debug, Clone, Copy)]
pub struct ContextClassifier {
    is_native: bool,
}

impl ContextClassifier {
    pub fn new(is_native: bool) -> Self {
        Self { is_native }
    }

    pub fn is_native(&self) -> bool {
        self.is_native
    }

    /// Both gates pass.
    pub fn is_admitted(&self, ctx: ExecutionContext) -> bool {
        ctx.is_worklet() && self.is_native
    }

    /// First failing gate, platform before context.
    pub fn admit(&self, ctx: ExecutionContext, operation: Operation) -> Result<()> {
        if !self.is_native {
            return Err(NativeViewError::UnsupportedPlatform { operation });
        }
        if !ctx.is_worklet() {
            return Err(NativeViewError::OutsideWorklet { operation });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_gate_wins_over_context() {
        let classifier = ContextClassifier::new(false);
        let err = classifier
            .admit(ExecutionContext::Main, Operation::Measure)
            .unwrap_err();
        assert!(matches!(err, NativeViewError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn main_context_rejected_on_native() {
        let classifier = ContextClassifier::new(true);
        let err = classifier
            .admit(ExecutionContext::Main, Operation::Measure)
            .unwrap_err();
        assert!(matches!(err, NativeViewError::OutsideWorklet { .. }));
        assert!(!classifier.is_admitted(ExecutionContext::Main));
    }

    #[test]
    fn worklet_on_native_admitted() {
        let classifier = ContextClassifier::new(true);
        assert!(classifier
            .admit(ExecutionContext::Worklet, Operation::Measure)
            .is_ok());
        assert!(classifier.is_admitted(ExecutionContext::Worklet));
        assert!(!ContextClassifier::new(false).is_admitted(ExecutionContext::Worklet));
    }
}

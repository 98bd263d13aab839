// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! nativeview — worklet-gated native view operations.
//!
//! `NativeMethods` wraps a host's raw primitives (measurement, view
//! commands, scrolling, gesture state) with the gating and validation
//! policy: only worklet calls on native platforms reach the host, sentinel
//! measurement responses become typed failures, and nothing panics.

pub mod classifier;
pub mod diagnostics;
pub mod methods;
pub mod scroll;
pub mod sentinel;
pub mod stub;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

use std::sync::Arc;

pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use methods::{get_tag, NativeMethods};
pub use traits::{FindNodeHandle, NativeHost, ViewHandleAccessor};

/// Host to use when the embedder has not provided one.
///
/// RETURNS: the stub host, which measures nothing and drops every command.
pub fn default_host() -> Arc<dyn NativeHost> {
    Arc::new(stub::StubHost)
}

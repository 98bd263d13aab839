// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// nativeview — Core types, errors and configuration shared across all crates.

pub mod config;
pub mod context;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::BridgeConfig;
pub use context::{ExecutionContext, WorkletScope};
pub use error::NativeViewError;
pub use types::*;

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scripted host for tests and the probe binary.
//
// Records every primitive call and counts how often the environment was
// queried, so callers can assert on "no native call" and "read once".

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use nativeview_core::{MeasuredGeometry, RenderArchitecture, ViewTag};
use serde_json::Value;

use crate::traits::*;

/// A primitive call as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Measure(ViewTag),
    Command {
        tag: ViewTag,
        command: String,
        args: Vec<Value>,
    },
    Scroll {
        tag: ViewTag,
        x: f64,
        y: f64,
        animated: bool,
    },
    GestureState {
        handler_tag: i32,
        state: i32,
    },
}

#[derive(Debug)]
pub struct ScriptedHost {
    native: bool,
    architecture: Mutex<RenderArchitecture>,
    measurement: Mutex<Option<MeasuredGeometry>>,
    calls: Mutex<Vec<HostCall>>,
    platform_queries: AtomicUsize,
    architecture_reads: AtomicUsize,
}

impl ScriptedHost {
    pub fn new(native: bool, architecture: RenderArchitecture) -> Self {
        Self {
            native,
            architecture: Mutex::new(architecture),
            measurement: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            platform_queries: AtomicUsize::new(0),
            architecture_reads: AtomicUsize::new(0),
        }
    }

    /// What the next `measure` calls return.
    pub fn respond_with(&self, measurement: Option<MeasuredGeometry>) {
        *self
            .measurement
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = measurement;
    }

    /// Flip the architecture indicator (only affects bridges built later).
    pub fn set_architecture(&self, architecture: RenderArchitecture) {
        *self
            .architecture
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = architecture;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn platform_queries(&self) -> usize {
        self.platform_queries.load(Ordering::SeqCst)
    }

    pub fn architecture_reads(&self) -> usize {
        self.architecture_reads.load(Ordering::SeqCst)
    }

    fn record(&self, call: HostCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl NativeHost for ScriptedHost {
    fn platform_name(&self) -> &str {
        "Scripted"
    }
}

impl NativeMeasure for ScriptedHost {
    fn measure(&self, tag: ViewTag) -> Option<MeasuredGeometry> {
        self.record(HostCall::Measure(tag));
        *self
            .measurement
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl NativeCommand for ScriptedHost {
    fn dispatch_command(&self, tag: ViewTag, command: &str, args: &[Value]) {
        self.record(HostCall::Command {
            tag,
            command: command.to_owned(),
            args: args.to_vec(),
        });
    }
}

impl NativeScroll for ScriptedHost {
    fn scroll_to(&self, tag: ViewTag, x: f64, y: f64, animated: bool) {
        self.record(HostCall::Scroll { tag, x, y, animated });
    }
}

impl NativeGestureState for ScriptedHost {
    fn set_gesture_state(&self, handler_tag: i32, new_state: i32) {
        self.record(HostCall::GestureState {
            handler_tag,
            state: new_state,
        });
    }
}

impl HostEnvironment for ScriptedHost {
    fn is_native_platform(&self) -> bool {
        self.platform_queries.fetch_add(1, Ordering::SeqCst);
        self.native
    }

    fn render_architecture(&self) -> RenderArchitecture {
        self.architecture_reads.fetch_add(1, Ordering::SeqCst);
        *self
            .architecture
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub host for desktop/CI builds where no native renderer is attached.
//
// Measurements are always absent and every command is dropped. Real hosts
// implement the traits on the embedding side.

use nativeview_core::{MeasuredGeometry, RenderArchitecture, ViewTag};
use serde_json::Value;

use crate::traits::*;

/// Whether this build target can have a privileged native path at all.
pub fn platform_supports_native_views() -> bool {
    !cfg!(target_family = "wasm")
}

/// No-op host returned when nothing else is wired in.
#[derive(Debug, Default)]
pub struct StubHost;

impl NativeHost for StubHost {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeMeasure for StubHost {
    fn measure(&self, tag: ViewTag) -> Option<MeasuredGeometry> {
        tracing::warn!(%tag, "NativeMeasure::measure called on stub host");
        None
    }
}

impl NativeCommand for StubHost {
    fn dispatch_command(&self, tag: ViewTag, command: &str, _args: &[Value]) {
        tracing::warn!(%tag, command, "NativeCommand::dispatch_command called on stub host");
    }
}

impl NativeScroll for StubHost {
    fn scroll_to(&self, tag: ViewTag, _x: f64, _y: f64, _animated: bool) {
        tracing::warn!(%tag, "NativeScroll::scroll_to called on stub host");
    }
}

impl NativeGestureState for StubHost {
    fn set_gesture_state(&self, handler_tag: i32, _new_state: i32) {
        tracing::warn!(handler_tag, "NativeGestureState::set_gesture_state called on stub host");
    }
}

impl HostEnvironment for StubHost {
    fn is_native_platform(&self) -> bool {
        platform_supports_native_views()
    }

    fn render_architecture(&self) -> RenderArchitecture {
        RenderArchitecture::Modern
    }
}

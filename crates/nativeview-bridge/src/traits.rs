// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Collaborator traits for the host side of the bridge.
//
// These are the raw native primitives. They do no gating and no validation;
// the policy layer in `methods` wraps them.

use nativeview_core::{MeasuredGeometry, RenderArchitecture, ViewTag};
use serde_json::Value;

/// Everything a host must provide to back `NativeMethods`.
pub trait NativeHost:
    NativeMeasure + NativeCommand + NativeScroll + NativeGestureState + HostEnvironment + Send + Sync
{
    /// Human-readable host name (e.g. "Android", "Desktop (stub)").
    fn platform_name(&self) -> &str;
}

/// Layout measurement.
pub trait NativeMeasure {
    /// Current layout box of `tag`.
    ///
    /// May return `None`, an `x` of -1234567 or a NaN `x` to signal that
    /// there is no meaningful measurement.
    fn measure(&self, tag: ViewTag) -> Option<MeasuredGeometry>;
}

/// Generic view commands.
pub trait NativeCommand {
    /// Fire-and-forget a named command at the view's native counterpart.
    fn dispatch_command(&self, tag: ViewTag, command: &str, args: &[Value]);
}

/// First-class scrolling, only used by the legacy renderer.
pub trait NativeScroll {
    fn scroll_to(&self, tag: ViewTag, x: f64, y: f64, animated: bool);
}

/// Gesture recognizer state transitions.
pub trait NativeGestureState {
    fn set_gesture_state(&self, handler_tag: i32, new_state: i32);
}

/// Process-wide facts about the host. Each is read once per bridge.
pub trait HostEnvironment {
    /// Whether the privileged native path exists at all (false on web and
    /// remote-debugging targets).
    fn is_native_platform(&self) -> bool;

    /// Which native tree renderer is active.
    fn render_architecture(&self) -> RenderArchitecture;
}

/// Accessor the caller hands over instead of a tag, because the tag can
/// change between renders. Resolved once per call, never cached.
pub trait ViewHandleAccessor {
    fn resolve(&self) -> ViewTag;
}

impl<F> ViewHandleAccessor for F
where
    F: Fn() -> ViewTag,
{
    fn resolve(&self) -> ViewTag {
        self()
    }
}

/// Resolution of a component reference to its native tag.
pub trait FindNodeHandle {
    type View: ?Sized;

    fn find_node_handle(&self, view: &Self::View) -> Option<ViewTag>;
}

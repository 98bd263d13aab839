// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native view operations callable from either runtime.
//
// Every operation is gated on platform capability and execution context and
// never panics or returns an error to its caller. Measurement and gesture
// failures are reported on the diagnostic sink; command dispatch and scroll
// run every frame and fail silently.

use std::sync::Arc;

use nativeview_core::error::{NativeViewError, Result};
use nativeview_core::{
    BridgeConfig, ExecutionContext, MeasuredGeometry, Operation, RenderArchitecture, ViewTag,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::classifier::ContextClassifier;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::scroll::{self, ScrollStrategy};
use crate::sentinel;
use crate::traits::{
    FindNodeHandle, HostEnvironment, NativeCommand, NativeGestureState, NativeHost, NativeMeasure,
    ViewHandleAccessor,
};

/// Policy layer over a `NativeHost`.
///
/// Platform capability and render architecture are resolved once, here, and
/// never re-read.
pub struct NativeMethods {
    host: Arc<dyn NativeHost>,
    sink: Arc<dyn DiagnosticSink>,
    classifier: ContextClassifier,
    scroll: &'static dyn ScrollStrategy,
    diagnostics: bool,
}

impl std::fmt::Debug for NativeMethods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeMethods")
            .field("platform", &self.host.platform_name())
            .field("is_native", &self.classifier.is_native())
            .field("scroll", &self.scroll.architecture())
            .finish()
    }
}

impl NativeMethods {
    /// Bind to `host`, logging diagnostics through `tracing`.
    pub fn new(host: Arc<dyn NativeHost>, config: BridgeConfig) -> Self {
        let sink = Arc::new(TracingSink::new(config.log_prefix.clone()));
        Self::with_sink(host, config, sink)
    }

    pub fn with_sink(
        host: Arc<dyn NativeHost>,
        config: BridgeConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let is_native = config
            .force_platform
            .unwrap_or_else(|| host.is_native_platform());
        let architecture = config
            .architecture
            .unwrap_or_else(|| host.render_architecture());

        info!(
            platform = host.platform_name(),
            is_native,
            %architecture,
            "native view bridge bound"
        );

        Self {
            host,
            sink,
            classifier: ContextClassifier::new(is_native),
            scroll: scroll::select(architecture),
            diagnostics: config.diagnostics,
        }
    }

    pub fn is_native(&self) -> bool {
        self.classifier.is_native()
    }

    /// Renderer the scroll strategy was bound for.
    pub fn scroll_architecture(&self) -> RenderArchitecture {
        self.scroll.architecture()
    }

    pub(crate) fn host(&self) -> &dyn NativeHost {
        self.host.as_ref()
    }

    /// Layout box of the view, or `None` with a diagnostic.
    pub fn measure(
        &self,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
    ) -> Option<MeasuredGeometry> {
        match self.try_measure(ctx, view) {
            Ok(measured) => Some(measured),
            Err(error) => {
                self.report(Operation::Measure, error);
                None
            }
        }
    }

    /// Same as [`measure`](Self::measure) but returns the failure instead of
    /// reporting it.
    pub fn try_measure(
        &self,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
    ) -> Result<MeasuredGeometry> {
        self.classifier.admit(ctx, Operation::Measure)?;

        let tag = view.resolve();
        if !tag.is_valid() {
            return Err(NativeViewError::ViewNotRendered { tag });
        }

        sentinel::validate_measurement(tag, self.host.measure(tag))
    }

    /// Fire-and-forget a named command. Silent no-op outside the worklet or
    /// off native platforms.
    pub fn dispatch_command(
        &self,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
        command: &str,
        args: &[Value],
    ) {
        if !self.classifier.is_admitted(ctx) {
            return;
        }
        if command.is_empty() {
            debug!("dispatching a command with an empty name");
        }
        let tag = view.resolve();
        debug!(%tag, command, args = args.len(), "dispatch command");
        self.host.dispatch_command(tag, command, args);
    }

    /// Scroll the view using the strategy bound at construction.
    pub fn scroll_to(
        &self,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
        x: f64,
        y: f64,
        animated: bool,
    ) {
        self.scroll.scroll_to(self, ctx, view, x, y, animated);
    }

    /// Move an externally tracked gesture recognizer to `new_state`.
    pub fn set_gesture_state(&self, ctx: ExecutionContext, handler_tag: i32, new_state: i32) {
        if !self.classifier.is_admitted(ctx) {
            self.report(
                Operation::SetGestureState,
                NativeViewError::OutsideWorklet {
                    operation: Operation::SetGestureState,
                },
            );
            return;
        }
        debug!(handler_tag, new_state, "set gesture state");
        self.host.set_gesture_state(handler_tag, new_state);
    }

    fn report(&self, operation: Operation, error: NativeViewError) {
        if self.diagnostics {
            self.sink.report(Diagnostic::new(operation, error));
        }
    }
}

/// Native tag of `view`, or `None` when there is no view.
pub fn get_tag<R>(resolver: &R, view: Option<&R::View>) -> Option<ViewTag>
where
    R: FindNodeHandle + ?Sized,
{
    view.and_then(|v| resolver.find_node_handle(v))
}

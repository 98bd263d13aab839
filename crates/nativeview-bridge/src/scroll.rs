// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scroll strategies, one per render architecture.
//
// `NativeMethods` picks one in its constructor and keeps it; the
// architecture is never looked at again per call.

use nativeview_core::{ExecutionContext, RenderArchitecture};
use serde_json::json;

use crate::methods::NativeMethods;
use crate::traits::{NativeScroll, ViewHandleAccessor};

/// Command name the modern renderer's scroll views respond to.
pub const SCROLL_TO_COMMAND: &str = "scrollTo";

pub trait ScrollStrategy: Send + Sync {
    fn architecture(&self) -> RenderArchitecture;

    fn scroll_to(
        &self,
        bridge: &NativeMethods,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
        x: f64,
        y: f64,
        animated: bool,
    );
}

/// Modern renderer: scrolling is a plain view command. Gating is left to
/// `dispatch_command`.
#[derive(Debug)]
pub struct CommandScroll;

impl ScrollStrategy for CommandScroll {
    fn architecture(&self) -> RenderArchitecture {
        RenderArchitecture::Modern
    }

    fn scroll_to(
        &self,
        bridge: &NativeMethods,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
        x: f64,
        y: f64,
        animated: bool,
    ) {
        bridge.dispatch_command(ctx, view, SCROLL_TO_COMMAND, &[json!(x), json!(y), json!(animated)]);
    }
}

/// Legacy renderer: dedicated scroll primitive with its own gate.
#[derive(Debug)]
pub struct DirectScroll;

impl ScrollStrategy for DirectScroll {
    fn architecture(&self) -> RenderArchitecture {
        RenderArchitecture::Legacy
    }

    fn scroll_to(
        &self,
        bridge: &NativeMethods,
        ctx: ExecutionContext,
        view: &dyn ViewHandleAccessor,
        x: f64,
        y: f64,
        animated: bool,
    ) {
        // Kept separate from the dispatch gate; the legacy primitive is not a
        // generic command.
        if !ctx.is_worklet() || !bridge.is_native() {
            return;
        }
        let tag = view.resolve();
        tracing::debug!(%tag, x, y, animated, "legacy scroll");
        bridge.host().scroll_to(tag, x, y, animated);
    }
}

/// Strategy for `architecture`.
pub fn select(architecture: RenderArchitecture) -> &'static dyn ScrollStrategy {
    match architecture {
        RenderArchitecture::Modern => &CommandScroll,
        RenderArchitecture::Legacy => &DirectScroll,
    }
}

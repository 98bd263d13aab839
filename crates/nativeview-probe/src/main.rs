// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// nativeview probe.
//
// Entry point. Initialises logging, loads the bridge configuration, then runs
// every bridge operation from the main and the worklet runtime against the
// stub host and a scripted host, printing what happened as JSON.

mod config_path;

use std::process::ExitCode;
use std::sync::Arc;

use nativeview_bridge::testing::ScriptedHost;
use nativeview_bridge::{default_host, NativeHost, NativeMethods, RecordingSink};
use nativeview_core::context::run_on_worklet;
use nativeview_core::human_errors::human_hint;
use nativeview_core::{
    BridgeConfig, ExecutionContext, GestureState, MeasuredGeometry, RenderArchitecture, ViewTag,
};
use serde_json::{json, Value};
use tracing::{error, info};

const SAMPLE_LAYOUT: MeasuredGeometry = MeasuredGeometry {
    x: 0.0,
    y: 88.0,
    width: 390.0,
    height: 756.0,
    page_x: 0.0,
    page_y: 88.0,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("nativeview probe starting");

    let config = match config_path::load() {
        Ok(config) => config,
        Err(e) => {
            error!(hint = %human_hint(&e).suggestion, "could not load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let scripted = Arc::new(ScriptedHost::new(
        true,
        config.architecture.unwrap_or(RenderArchitecture::Modern),
    ));
    scripted.respond_with(Some(SAMPLE_LAYOUT));

    let report = json!({
        "stub": probe(default_host(), &config),
        "scripted": probe(scripted.clone(), &config),
        "scripted_host_calls": format!("{:?}", scripted.calls()),
    });
    println!("{report:#}");

    ExitCode::SUCCESS
}

/// Run every operation from both runtimes and collect the outcomes.
fn probe(host: Arc<dyn NativeHost>, config: &BridgeConfig) -> Value {
    let platform = host.platform_name().to_owned();
    let sink = Arc::new(RecordingSink::new());
    let methods = NativeMethods::with_sink(host, config.clone(), sink.clone());

    let main = exercise(&methods, ExecutionContext::Main);
    let worklet = run_on_worklet(|ctx| exercise(&methods, ctx));

    let diagnostics: Vec<Value> = sink
        .take()
        .into_iter()
        .map(|d| {
            json!({
                "operation": d.operation,
                "tag": d.tag(),
                "message": format!("{} {}", config.log_prefix, d.error),
                "hint": d.hint().suggestion,
                "at": d.at.to_rfc3339(),
            })
        })
        .collect();

    json!({
        "platform": platform,
        "is_native": methods.is_native(),
        "scroll_architecture": methods.scroll_architecture(),
        "main": main,
        "worklet": worklet,
        "diagnostics": diagnostics,
    })
}

fn exercise(methods: &NativeMethods, ctx: ExecutionContext) -> Value {
    let mounted = || ViewTag(1);
    let unmounted = || ViewTag::INVALID;

    let measured = methods.measure(ctx, &mounted);
    let unmounted_measure = methods.measure(ctx, &unmounted);
    methods.dispatch_command(ctx, &mounted, "focus", &[]);
    methods.scroll_to(ctx, &mounted, 0.0, 120.0, true);
    methods.set_gesture_state(ctx, 1, GestureState::Active.code());

    json!({
        "context": ctx,
        "measure": measured,
        "measure_unmounted": unmounted_measure,
    })
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Configuration file lookup.

use std::path::PathBuf;

use nativeview_core::error::Result;
use nativeview_core::BridgeConfig;
use tracing::info;

/// Load the bridge configuration.
///
/// Lookup order: first CLI argument, `NATIVEVIEW_CONFIG`, then
/// `<config dir>/nativeview/bridge.json` if it exists. Falls back to
/// defaults when none is found.
pub fn load() -> Result<BridgeConfig> {
    let explicit = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("NATIVEVIEW_CONFIG").map(PathBuf::from));

    if let Some(path) = explicit {
        info!(path = %path.display(), "loading bridge configuration");
        return BridgeConfig::load(path);
    }

    let default = config_dir().join("nativeview").join("bridge.json");
    if default.is_file() {
        info!(path = %default.display(), "loading bridge configuration");
        return BridgeConfig::load(default);
    }

    Ok(BridgeConfig::default())
}

fn config_dir() -> PathBuf {
    // Try XDG config dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config");
    }
    PathBuf::from(".")
}

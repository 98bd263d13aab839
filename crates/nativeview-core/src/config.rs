// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NativeViewError, Result};
use crate::types::RenderArchitecture;

/// Settings read once when the bridge is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Prefix put in front of every diagnostic message.
    pub log_prefix: String,
    /// Override for the host's render-architecture indicator.
    pub architecture: Option<RenderArchitecture>,
    /// Override for the host's platform-capability query.
    pub force_platform: Option<bool>,
    /// Forward diagnostics to the sink. Outcomes are the same either way.
    pub diagnostics: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_prefix: "[nativeview]".into(),
            architecture: None,
            force_platform: None,
            diagnostics: true,
        }
    }
}

impl BridgeConfig {
    /// Parse a JSON document. Missing keys take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    fn validate(&self) -> Result<()> {
        if self.log_prefix.contains('\n') {
            return Err(NativeViewError::Config(
                "log_prefix must be a single line".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = BridgeConfig::from_json(r#"{"architecture":"legacy"}"#).unwrap();
        assert_eq!(config.architecture, Some(RenderArchitecture::Legacy));
        assert_eq!(config.log_prefix, "[nativeview]");
        assert!(config.diagnostics);
        assert!(config.force_platform.is_none());
    }

    #[test]
    fn multiline_prefix_rejected() {
        let err = BridgeConfig::from_json(r#"{"log_prefix":"a\nb"}"#).unwrap_err();
        assert!(matches!(err, NativeViewError::Config(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = BridgeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, NativeViewError::Serialization(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"force_platform":false,"diagnostics":false}}"#).unwrap();

        let config = BridgeConfig::load(file.path()).unwrap();
        assert_eq!(config.force_platform, Some(false));
        assert!(!config.diagnostics);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BridgeConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NativeViewError::Io(_)));
    }
}

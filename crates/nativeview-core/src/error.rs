// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for nativeview.
//
// None of the view operations surface these to their caller: they are the
// typed outcome that gets reported on the diagnostic side channel before the
// operation falls back to its safe default.

use thiserror::Error;

use crate::types::{Operation, ViewTag};

/// Top-level error type for all nativeview operations.
#[derive(Debug, Error)]
pub enum NativeViewError {
    // -- Gate failures --
    #[error("{operation} cannot be used on web or non-native debugging targets")]
    UnsupportedPlatform { operation: Operation },

    #[error("{}", .operation.outside_worklet_message())]
    OutsideWorklet { operation: Operation },

    // -- Render-tree validity --
    #[error(
        "The view with tag {tag} is not a valid argument for measure(). This may be because \
         the view is not currently rendered, which may not be a bug (e.g. an off-screen list item)."
    )]
    ViewNotRendered { tag: ViewTag },

    // -- Native measurement responses --
    #[error(
        "The view with tag {tag} has some undefined, not-yet-computed or meaningless layout \
         metrics. This may be because the view is not currently rendered, which may not be a \
         bug (e.g. an off-screen list item)."
    )]
    MetricsNotComputed { tag: ViewTag },

    #[error("The view with tag {tag} returned an invalid measurement response")]
    InvalidResponse { tag: ViewTag },

    #[error(
        "The view with tag {tag} gets view-flattened by the platform renderer. To measure it, \
         disable view flattening on this component."
    )]
    ViewFlattened { tag: ViewTag },

    // -- Configuration --
    #[error("invalid bridge configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NativeViewError {
    /// The view tag the failure refers to, if it got far enough to resolve one.
    pub fn tag(&self) -> Option<ViewTag> {
        match self {
            Self::ViewNotRendered { tag }
            | Self::MetricsNotComputed { tag }
            | Self::InvalidResponse { tag }
            | Self::ViewFlattened { tag } => Some(*tag),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NativeViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_messages_name_the_tag() {
        let tag = ViewTag(42);
        for err in [
            NativeViewError::ViewNotRendered { tag },
            NativeViewError::MetricsNotComputed { tag },
            NativeViewError::InvalidResponse { tag },
            NativeViewError::ViewFlattened { tag },
        ] {
            assert!(err.to_string().contains("tag 42"), "{err}");
            assert_eq!(err.tag(), Some(tag));
        }
    }

    #[test]
    fn outside_worklet_wording_depends_on_operation() {
        let measure = NativeViewError::OutsideWorklet {
            operation: Operation::Measure,
        }
        .to_string();
        let gesture = NativeViewError::OutsideWorklet {
            operation: Operation::SetGestureState,
        }
        .to_string();

        assert!(measure.contains("render"));
        assert!(gesture.contains("non-worklet function"));
        assert_ne!(measure, gesture);
    }

    #[test]
    fn gate_failures_carry_no_tag() {
        let err = NativeViewError::UnsupportedPlatform {
            operation: Operation::Measure,
        };
        assert!(err.tag().is_none());
        assert!(err.to_string().starts_with("measure()"));
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the nativeview bridge.

use serde::{Deserialize, Serialize};

/// Identifier the native rendering layer uses to address a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewTag(pub i32);

impl ViewTag {
    /// Tag handed out for a view that is not currently mounted.
    pub const INVALID: Self = Self(-1);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl std::fmt::Display for ViewTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ViewTag {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

/// Layout box of a view as reported by the native measurement primitive.
///
/// `x`/`y` are relative to the parent, `page_x`/`page_y` to the root view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasuredGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl MeasuredGeometry {
    /// Whether every field is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.x,
            self.y,
            self.width,
            self.height,
            self.page_x,
            self.page_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Which native tree renderer the host runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderArchitecture {
    /// Paper-era renderer: scrolling is a first-class native primitive.
    Legacy,
    /// Shadow-tree renderer: scrolling is an ordinary view command.
    Modern,
}

impl std::fmt::Display for RenderArchitecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

/// Public operations of the bridge, used to label diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Measure,
    DispatchCommand,
    ScrollTo,
    SetGestureState,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Measure => "measure()",
            Self::DispatchCommand => "dispatch_command()",
            Self::ScrollTo => "scroll_to()",
            Self::SetGestureState => "set_gesture_state()",
        }
    }

    /// Message reported when the operation runs outside the worklet runtime.
    ///
    /// Measurement gets the long explanation because the usual cause is a
    /// worklet evaluated on the main runtime during render. For gesture state
    /// it is a plain usage error.
    pub fn outside_worklet_message(&self) -> String {
        match self {
            Self::Measure => format!(
                "{} was called from the main context. Measurement is only available in the \
                 worklet runtime. This may also happen if it was called by a worklet that an \
                 animated-style hook evaluates on the main runtime during render. To prevent \
                 this, only call it when the execution context is the worklet; it will then run \
                 on the worklet runtime after the render has completed.",
                self.name()
            ),
            Self::SetGestureState | Self::DispatchCommand | Self::ScrollTo => format!(
                "You can not use {} in non-worklet function.",
                self.name()
            ),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Conventional gesture recognizer states.
///
/// The bridge forwards raw state codes untouched; this enum is a typed
/// convenience for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureState {
    Undetermined = 0,
    Failed = 1,
    Began = 2,
    Cancelled = 3,
    Active = 4,
    End = 5,
}

impl GestureState {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for GestureState {
    type Error = i32;

    fn try_from(code: i32) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Undetermined),
            1 => Ok(Self::Failed),
            2 => Ok(Self::Began),
            3 => Ok(Self::Cancelled),
            4 => Ok(Self::Active),
            5 => Ok(Self::End),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_tag_is_minus_one() {
        assert_eq!(ViewTag::INVALID, ViewTag(-1));
        assert!(!ViewTag::INVALID.is_valid());
        assert!(ViewTag(0).is_valid());
    }

    #[test]
    fn geometry_finiteness() {
        let mut g = MeasuredGeometry {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
            page_x: 5.0,
            page_y: 6.0,
        };
        assert!(g.is_finite());
        g.page_y = f64::INFINITY;
        assert!(!g.is_finite());
    }

    #[test]
    fn geometry_uses_camel_case_on_the_wire() {
        let json = r#"{"x":0,"y":1,"width":2,"height":3,"pageX":4,"pageY":5}"#;
        let g: MeasuredGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(g.page_x, 4.0);
        assert_eq!(g.page_y, 5.0);
    }

    #[test]
    fn gesture_state_codes() {
        assert_eq!(GestureState::Active.code(), 4);
        assert_eq!(GestureState::try_from(5), Ok(GestureState::End));
        assert_eq!(GestureState::try_from(9), Err(9));
    }

    #[test]
    fn architecture_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RenderArchitecture::Modern).unwrap(),
            "\"modern\""
        );
    }
}

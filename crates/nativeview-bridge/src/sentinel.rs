// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Boundary adapter for the native measurement primitive.
//
// The host encodes "no meaningful measurement" in-band. This is the only
// place those encodings are matched; everything past it sees
// `NativeViewError` variants.

use nativeview_core::error::{NativeViewError, Result};
use nativeview_core::{MeasuredGeometry, ViewTag};

/// `x` value the native layer returns for a response it could not build.
pub const INVALID_MEASUREMENT_X: f64 = -1234567.0;

/// Classify a raw measurement. Order matters: absence first, then the
/// invalid-response marker, then NaN (flattened view), then any other
/// non-finite field.
pub fn validate_measurement(
    tag: ViewTag,
    raw: Option<MeasuredGeometry>,
) -> Result<MeasuredGeometry> {
    let Some(measured) = raw else {
        return Err(NativeViewError::MetricsNotComputed { tag });
    };

    if measured.x == INVALID_MEASUREMENT_X {
        return Err(NativeViewError::InvalidResponse { tag });
    }

    if measured.x.is_nan() {
        return Err(NativeViewError::ViewFlattened { tag });
    }

    if !measured.is_finite() {
        return Err(NativeViewError::InvalidResponse { tag });
    }

    Ok(measured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(x: f64) -> MeasuredGeometry {
        MeasuredGeometry {
            x,
            y: 10.0,
            width: 100.0,
            height: 50.0,
            page_x: x + 5.0,
            page_y: 20.0,
        }
    }

    #[test]
    fn absent_is_not_computed() {
        let err = validate_measurement(ViewTag(7), None).unwrap_err();
        assert!(matches!(err, NativeViewError::MetricsNotComputed { tag } if tag == ViewTag(7)));
    }

    #[test]
    fn marker_x_is_invalid_even_with_good_fields() {
        let err = validate_measurement(ViewTag(7), Some(geometry(INVALID_MEASUREMENT_X))).unwrap_err();
        assert!(matches!(err, NativeViewError::InvalidResponse { .. }));
    }

    #[test]
    fn nan_x_is_flattened() {
        let raw = MeasuredGeometry {
            x: f64::NAN,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            page_x: 0.0,
            page_y: 0.0,
        };
        let err = validate_measurement(ViewTag(7), Some(raw)).unwrap_err();
        assert!(matches!(err, NativeViewError::ViewFlattened { .. }));
    }

    #[test]
    fn nan_x_reported_as_flattened_before_other_bad_fields() {
        let mut raw = geometry(f64::NAN);
        raw.height = f64::INFINITY;
        let err = validate_measurement(ViewTag(7), Some(raw)).unwrap_err();
        assert!(matches!(err, NativeViewError::ViewFlattened { .. }));
    }

    #[test]
    fn non_finite_secondary_field_is_invalid() {
        let mut raw = geometry(3.0);
        raw.width = f64::NAN;
        let err = validate_measurement(ViewTag(7), Some(raw)).unwrap_err();
        assert!(matches!(err, NativeViewError::InvalidResponse { .. }));
    }

    #[test]
    fn well_formed_passes_through_unchanged() {
        let raw = geometry(-3.5);
        assert_eq!(validate_measurement(ViewTag(7), Some(raw)).unwrap(), raw);
    }
}

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle normalization.
//!
//! Radians are normalized into `(-π, π]` and degrees into `(-180, 180]`.
//! Values already inside the range are returned unchanged.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`, `sin_cos`

/// Normalizes `radians` into `(-π, π]`.
///
/// Non-finite input is returned as is.
#[must_use]
pub fn normalize(radians: f64) -> f64 {
    wrap(radians, PI)
}

/// Normalizes `degrees` into `(-180, 180]`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap(degrees, 180.0)
}

/// Shortest signed angular difference `a - b`, normalized into `(-π, π]`.
#[must_use]
pub fn diff(a: f64, b: f64) -> f64 {
    let (sin, cos) = (a - b).sin_cos();
    normalize(sin.atan2(cos))
}

fn wrap(value: f64, half_turn: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let turn = 2.0 * half_turn;
    let mut r = value % turn;
    if r > half_turn {
        r -= turn;
    }
    if r <= -half_turn {
        r += turn;
    }
    r
}

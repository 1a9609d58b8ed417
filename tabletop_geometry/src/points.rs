// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and vector helpers.
//!
//! Addition, subtraction, negation, scalar multiplication, length and distance
//! are provided by [`kurbo`] directly (`Point - Point = Vec2`, `Point + Vec2`,
//! `Vec2 * f64`, [`Vec2::length`], [`Point::distance`]). This module only adds
//! the operations the gesture code needs on top of that.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use tabletop_geometry::points;
//!
//! let anchor = Point::new(10.0, 10.0);
//! let p = points::arc(anchor, 0.0, 5.0);
//! assert_eq!(p, Point::new(15.0, 10.0));
//! assert_eq!(points::normalize(Vec2::ZERO), None);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`, `sin_cos`
use kurbo::{Point, Vec2};

/// Mean of two points.
#[must_use]
pub fn mean(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Bearing of `p` as seen from `q`, i.e. `atan2(p.y - q.y, p.x - q.x)`.
#[must_use]
pub fn angle(p: Point, q: Point) -> f64 {
    (p.y - q.y).atan2(p.x - q.x)
}

/// Polar projection: the point at `radius` from `center` in direction `alpha`.
#[must_use]
pub fn arc(center: Point, alpha: f64, radius: f64) -> Point {
    let (sin, cos) = alpha.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Componentwise product.
#[must_use]
pub fn multiply(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x * b.x, a.y * b.y)
}

/// Unit vector in the direction of `v`.
///
/// Returns `None` for a zero-length (or non-finite) vector instead of
/// producing `NaN` components.
#[must_use]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return None;
    }
    Some(v / len)
}

/// Rotates `v` by `alpha` radians with the standard 2D rotation matrix.
#[must_use]
pub fn rotate(v: Vec2, alpha: f64) -> Vec2 {
    let (sin, cos) = alpha.sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

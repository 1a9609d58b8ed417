// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tabletop_geometry --heading-base-level=0

//! Tabletop Geometry: the small amount of 2D math the gesture pipeline needs.
//!
//! - [`points`]: helpers over [`kurbo::Point`] / [`kurbo::Vec2`] that the
//!   gesture and transform code reaches for (mean, bearing, polar projection,
//!   guarded normalization).
//! - [`angle`]: normalization of radians and degrees into a half-open range and
//!   the shortest signed difference between two angles.
//! - [`Polygon`]: a center plus center-relative vertices with rotation,
//!   point containment and a Separating Axis Theorem intersection test that
//!   reports the least-overlap axis.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use tabletop_geometry::Polygon;
//!
//! let a = Polygon::rect(Point::new(0.0, 0.0), 20.0, 20.0, 0.0);
//! let b = Polygon::rect(Point::new(5.0, 0.0), 20.0, 20.0, 0.0);
//!
//! let hit = a.intersects_with(&b).expect("squares overlap");
//! assert!((hit.overlap - 15.001).abs() < 1e-9);
//! assert!((hit.axis - Vec2::new(1.0, 0.0)).hypot() < 1e-9);
//!
//! let far = Polygon::rect(Point::new(25.0, 0.0), 20.0, 20.0, 0.0);
//! assert!(a.intersects_with(&far).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod angle;
pub mod points;
mod polygon;

pub use polygon::{Intersection, OVERLAP_BIAS, Polygon};

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::points;

/// Bias added to every reported overlap so that touching polygons report a
/// strictly positive penetration.
pub const OVERLAP_BIAS: f64 = 0.001;

/// Result of a successful [`Polygon::intersects_with`] test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Smallest overlap of the two projections over all tested axes, plus
    /// [`OVERLAP_BIAS`].
    pub overlap: f64,
    /// Unit axis on which that smallest overlap was found.
    pub axis: Vec2,
}

/// A convex polygon stored as a center plus center-relative vertices.
///
/// Vertex insertion order is the winding order. Both [`contains_point`] and
/// [`intersects_with`] assume it stays consistent; a polygon with fewer than
/// three vertices has no meaningful area and is a caller error for the SAT test.
///
/// [`contains_point`]: Polygon::contains_point
/// [`intersects_with`]: Polygon::intersects_with
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    center: Point,
    points: SmallVec<[Vec2; 4]>,
}

impl Polygon {
    /// Creates an empty polygon around `center`.
    #[must_use]
    pub fn new(center: Point) -> Self {
        Self {
            center,
            points: SmallVec::new(),
        }
    }

    /// Creates a `width` x `height` rectangle centered at `center`, rotated by
    /// `rotation` radians about its center.
    ///
    /// Corners are added clockwise in screen coordinates starting top-left.
    #[must_use]
    pub fn rect(center: Point, width: f64, height: f64, rotation: f64) -> Self {
        let w2 = width / 2.0;
        let h2 = height / 2.0;
        let mut polygon = Self::new(center);
        polygon.add_point(Vec2::new(-w2, -h2));
        polygon.add_point(Vec2::new(w2, -h2));
        polygon.add_point(Vec2::new(w2, h2));
        polygon.add_point(Vec2::new(-w2, h2));
        if rotation != 0.0 {
            polygon.rotate(rotation);
        }
        polygon
    }

    /// Axis-aligned bounding polygon of `points`, centered at the mean of the
    /// minimum and maximum extents.
    ///
    /// This is a bounding box, not a convex hull. Returns `None` for an empty
    /// input.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Rect::from_points(*first, *first);
        for p in rest {
            bounds = bounds.union_pt(*p);
        }
        Some(Self::from_rect(bounds))
    }

    /// Rectangle polygon covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::rect(rect.center(), rect.width(), rect.height(), 0.0)
    }

    /// Center of the polygon.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Moves the polygon so that its center is `center`.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Moves the polygon by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Center-relative vertices in winding order.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a vertex given relative to the center.
    pub fn add_point(&mut self, offset: Vec2) {
        self.points.push(offset);
    }

    /// Appends a vertex given in absolute coordinates.
    pub fn add_absolute_point(&mut self, point: Point) {
        self.points.push(point - self.center);
    }

    /// Absolute vertex positions in winding order.
    pub fn absolute_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|v| self.center + *v)
    }

    /// Rotates all vertices by `alpha` radians about the polygon's center.
    pub fn rotate(&mut self, alpha: f64) {
        for v in &mut self.points {
            *v = points::rotate(*v, alpha);
        }
    }

    /// Even-odd ray casting point-in-polygon test.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let p = point - self.center;
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Separating Axis Theorem test against `other`.
    ///
    /// Both polygons are projected onto the edge normals of *both* polygons.
    /// Returns `None` as soon as an axis separates them. Otherwise returns the
    /// smallest per-axis overlap (plus [`OVERLAP_BIAS`]) together with the axis
    /// it was found on. Ties keep the first axis encountered, visiting this
    /// polygon's edges before `other`'s.
    ///
    /// The per-axis overlap measures how far the projection that ends last
    /// reaches back into the other one; it is symmetric in its arguments, so
    /// `a.intersects_with(&b)` and `b.intersects_with(&a)` agree on whether the
    /// polygons meet and on the overlap magnitude.
    #[must_use]
    pub fn intersects_with(&self, other: &Self) -> Option<Intersection> {
        let mut best: Option<Intersection> = None;
        for polygon in [self, other] {
            let n = polygon.points.len();
            for i in 0..n {
                let prev = polygon.points[if i == 0 { n - 1 } else { i - 1 }];
                let curr = polygon.points[i];
                let edge = curr - prev;
                let Some(axis) = points::normalize(Vec2::new(-edge.y, edge.x)) else {
                    continue;
                };
                let (min_a, max_a) = self.project(axis);
                let (min_b, max_b) = other.project(axis);
                if max_a < min_b || max_b < min_a {
                    return None;
                }
                let overlap = axis_overlap(min_a, max_a, min_b, max_b);
                if best.is_none_or(|b| overlap < b.overlap) {
                    best = Some(Intersection { overlap, axis });
                }
            }
        }
        best.map(|b| Intersection {
            overlap: b.overlap + OVERLAP_BIAS,
            axis: b.axis,
        })
    }

    fn project(&self, axis: Vec2) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for p in self.absolute_points() {
            let d = p.to_vec2().dot(axis);
            min = min.min(d);
            max = max.max(d);
        }
        (min, max)
    }
}

fn axis_overlap(min_a: f64, max_a: f64, min_b: f64, max_b: f64) -> f64 {
    if max_a > max_b {
        max_b - min_a
    } else if max_b > max_a {
        max_a - min_b
    } else {
        max_a - min_a.min(min_b)
    }
}

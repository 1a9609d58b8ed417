// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-contact position history and the gesture delta derived from it.
//!
//! ## Usage
//!
//! 1) Call [`InteractionPoints::update`] for every contact of an event. It
//!    reports whether the contact is new.
//! 2) Read [`InteractionPoints::delta`] to get the pan/zoom/rotate change
//!    since the previous frame.
//! 3) Call [`InteractionPoints::update_previous`] once the frame has been
//!    consumed. Calling it earlier makes the next delta zero.
//! 4) On release call [`InteractionPoints::stop`], classify with
//!    [`InteractionPoints::is_tap`], then [`InteractionPoints::finish`].
//!
//! ```
//! use kurbo::Point;
//! use tabletop_interaction::{InteractionPoints, PointerKey, TapPolicy};
//!
//! let mut points = InteractionPoints::new(TapPolicy::default());
//! let (a, b) = (PointerKey::Id(1), PointerKey::Id(2));
//! points.update(a, Point::new(0.0, 0.0), 0.0);
//! points.update(b, Point::new(100.0, 0.0), 0.0);
//!
//! points.update(a, Point::new(10.0, 0.0), 16.0);
//! points.update(b, Point::new(130.0, 0.0), 16.0);
//! let delta = points.delta().unwrap();
//! assert!((delta.zoom - 1.2).abs() < 1e-12);
//! assert_eq!(delta.about, Point::new(70.0, 0.0));
//! points.update_previous();
//! ```

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use tabletop_geometry::{angle, points};

use crate::{PointMap, PointerKey};

/// Thresholds for classifying a released contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapPolicy {
    /// Maximum travel between press and release for a tap or long press.
    pub tap_distance: f64,
    /// Press duration in milliseconds after which a short-travel release is a
    /// long press instead of a tap.
    pub long_press_time: f64,
}

impl Default for TapPolicy {
    fn default() -> Self {
        Self {
            tap_distance: 10.0,
            long_press_time: 500.0,
        }
    }
}

/// Change of a gesture between two frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionDelta {
    /// Translation of the gesture center.
    pub translate: Vec2,
    /// Ratio of the current to the previous pinch distance.
    pub zoom: f64,
    /// Rotation of the pinch bearing in radians, in `(-π, π]`.
    pub rotate: f64,
    /// Point to hold fixed while applying `zoom` and `rotate`.
    pub about: Point,
}

/// One of the position snapshots held by [`InteractionPoints`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// Latest position of every active contact.
    Current,
    /// Position at the previous frame.
    Previous,
    /// Position at first contact.
    Start,
    /// Position at release.
    Ended,
}

/// Start, previous, current and ended positions of every contact in a gesture
/// session, with press timestamps for tap classification.
///
/// A key enters `current`, `previous` and `start` on first [`update`], moves
/// from `current`/`previous` to `ended` on [`stop`], and is purged from
/// everything on [`finish`].
///
/// [`update`]: InteractionPoints::update
/// [`stop`]: InteractionPoints::stop
/// [`finish`]: InteractionPoints::finish
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionPoints {
    current: PointMap,
    previous: PointMap,
    start: PointMap,
    ended: PointMap,
    timestamps: HashMap<PointerKey, f64>,
    tap: TapPolicy,
}

impl InteractionPoints {
    /// Creates an empty set classifying releases with `tap`.
    #[must_use]
    pub fn new(tap: TapPolicy) -> Self {
        Self {
            tap,
            ..Self::default()
        }
    }

    /// Tap classification thresholds.
    #[must_use]
    pub fn tap_policy(&self) -> TapPolicy {
        self.tap
    }

    /// Latest positions of active contacts.
    #[must_use]
    pub fn current(&self) -> &PointMap {
        &self.current
    }

    /// Positions at the previous frame.
    #[must_use]
    pub fn previous(&self) -> &PointMap {
        &self.previous
    }

    /// Positions at first contact.
    #[must_use]
    pub fn start(&self) -> &PointMap {
        &self.start
    }

    /// Release positions of contacts that ended but are not finished yet.
    #[must_use]
    pub fn ended(&self) -> &PointMap {
        &self.ended
    }

    /// The snapshot selected by `aspect`.
    #[must_use]
    pub fn aspect(&self, aspect: Aspect) -> &PointMap {
        match aspect {
            Aspect::Current => &self.current,
            Aspect::Previous => &self.previous,
            Aspect::Start => &self.start,
            Aspect::Ended => &self.ended,
        }
    }

    pub(crate) fn aspect_mut(&mut self, aspect: Aspect) -> &mut PointMap {
        match aspect {
            Aspect::Current => &mut self.current,
            Aspect::Previous => &mut self.previous,
            Aspect::Start => &mut self.start,
            Aspect::Ended => &mut self.ended,
        }
    }

    /// Press timestamp of `key` in milliseconds.
    #[must_use]
    pub fn timestamp(&self, key: PointerKey) -> Option<f64> {
        self.timestamps.get(&key).copied()
    }

    pub(crate) fn set_timestamp_if_absent(&mut self, key: PointerKey, time: f64) {
        self.timestamps.entry(key).or_insert(time);
    }

    /// Records `point` as the current position of `key`.
    ///
    /// Returns `true` if `key` was not seen before in this session, in which
    /// case its start and previous positions and its press time are set too.
    pub fn update(&mut self, key: PointerKey, point: Point, time: f64) -> bool {
        self.current.insert(key, point);
        if self.start.contains(key) {
            return false;
        }
        self.start.insert(key, point);
        self.previous.insert(key, point);
        self.timestamps.insert(key, time);
        true
    }

    /// Copies every current position into `previous`.
    ///
    /// Call once per frame, after the frame's delta has been consumed.
    pub fn update_previous(&mut self) {
        for (key, point) in self.current.iter() {
            self.previous.insert(key, point);
        }
    }

    /// Ends contact `key` at `point`.
    ///
    /// Only active keys are affected. Start position and press time are kept
    /// for tap classification.
    pub fn stop(&mut self, key: PointerKey, point: Point) {
        if self.current.remove(key).is_some() {
            self.previous.remove(key);
            self.ended.insert(key, point);
        }
    }

    /// Purges `key` from every snapshot.
    pub fn finish(&mut self, key: PointerKey) {
        self.current.remove(key);
        self.previous.remove(key);
        self.start.remove(key);
        self.ended.remove(key);
        self.timestamps.remove(&key);
    }

    /// Returns `true` once no contact is active.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current.is_empty()
    }

    /// Returns `true` when the previous frame had two or more contacts and the
    /// current one has fewer than two.
    #[must_use]
    pub fn is_no_longer_two_finger(&self) -> bool {
        self.previous.len() > 1 && self.current.len() < 2
    }

    /// Displacement of `key` since the previous frame.
    #[must_use]
    pub fn moved(&self, key: PointerKey) -> Option<Vec2> {
        Some(self.current.get(key)? - self.previous.get(key)?)
    }

    /// Displacement of the centroid of all contacts since the previous frame.
    #[must_use]
    pub fn move_delta(&self) -> Option<Vec2> {
        Some(self.current.mean()? - self.previous.mean()?)
    }

    /// Pan/zoom/rotate change since the previous frame.
    ///
    /// Only keys present in both `current` and `previous` count. With one such
    /// key the delta is its plain displacement. With two or more, the pair
    /// farthest apart is used, chosen independently in `current` and in
    /// `previous`; with more than two contacts those need not be the same
    /// keys, so the result approximates rather than tracks one physical pair.
    #[must_use]
    pub fn delta(&self) -> Option<InteractionDelta> {
        let paired: Vec<(PointerKey, Point)> = self
            .current
            .sorted()
            .into_iter()
            .filter(|(key, _)| self.previous.contains(*key))
            .collect();
        match paired.len() {
            0 => None,
            1 => {
                let (key, c) = paired[0];
                let p = self.previous.get(key)?;
                Some(InteractionDelta {
                    translate: c - p,
                    zoom: 1.0,
                    rotate: 0.0,
                    about: c,
                })
            }
            2 => {
                let (k1, c1) = paired[0];
                let (k2, c2) = paired[1];
                let p1 = self.previous.get(k1)?;
                let p2 = self.previous.get(k2)?;
                Some(pinch(c1, c2, p1, p2))
            }
            _ => {
                let [(_, c1), (_, c2)] = self.current.farthests()?;
                let [(_, p1), (_, p2)] = self.previous.farthests()?;
                Some(pinch(c1, c2, p1, p2))
            }
        }
    }

    /// Returns `true` if `key` ended within [`TapPolicy::tap_distance`] of its
    /// start and was held no longer than [`TapPolicy::long_press_time`] as of
    /// `now`.
    #[must_use]
    pub fn is_tap(&self, key: PointerKey, now: f64) -> bool {
        self.short_travel_press(key)
            .is_some_and(|t0| now <= t0 + self.tap.long_press_time)
    }

    /// Returns `true` if `key` ended within [`TapPolicy::tap_distance`] of its
    /// start and was held longer than [`TapPolicy::long_press_time`] as of
    /// `now`.
    #[must_use]
    pub fn is_long_press(&self, key: PointerKey, now: f64) -> bool {
        self.short_travel_press(key)
            .is_some_and(|t0| now > t0 + self.tap.long_press_time)
    }

    /// Returns `true` if any ended key is a tap.
    #[must_use]
    pub fn is_any_tap(&self, now: f64) -> bool {
        self.ended.keys().any(|key| self.is_tap(key, now))
    }

    /// Returns `true` if any ended key is a long press.
    #[must_use]
    pub fn is_any_long_press(&self, now: f64) -> bool {
        self.ended.keys().any(|key| self.is_long_press(key, now))
    }

    /// Returns `true` if `key` is the stylus.
    #[must_use]
    pub fn is_stylus(&self, key: PointerKey) -> bool {
        key.is_stylus()
    }

    fn short_travel_press(&self, key: PointerKey) -> Option<f64> {
        let start = self.start.get(key)?;
        let ended = self.ended.get(key)?;
        if ended.distance(start) < self.tap.tap_distance {
            self.timestamp(key)
        } else {
            None
        }
    }
}

fn pinch(c1: Point, c2: Point, p1: Point, p2: Point) -> InteractionDelta {
    let cm = points::mean(c1, c2);
    let pm = points::mean(p1, p2);
    let previous_distance = p1.distance(p2);
    let current_distance = c1.distance(c2);
    let zoom = if previous_distance != 0.0 && current_distance != 0.0 {
        current_distance / previous_distance
    } else {
        1.0
    };
    let rotate = angle::diff(points::angle(c2, c1), points::angle(p2, p1));
    InteractionDelta {
        translate: cm - pm,
        zoom,
        rotate,
        about: cm,
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_6;

    use super::*;

    const A: PointerKey = PointerKey::Id(1);
    const B: PointerKey = PointerKey::Id(2);
    const C: PointerKey = PointerKey::Id(3);

    fn tracked(points: &[(PointerKey, Point)]) -> InteractionPoints {
        let mut ip = InteractionPoints::new(TapPolicy::default());
        for (k, p) in points {
            ip.update(*k, *p, 0.0);
        }
        ip
    }

    #[test]
    fn update_reports_new_contacts_only() {
        let mut ip = InteractionPoints::new(TapPolicy::default());
        assert!(ip.update(A, Point::new(1.0, 1.0), 5.0));
        assert!(!ip.update(A, Point::new(2.0, 2.0), 9.0));
        assert_eq!(ip.start().get(A), Some(Point::new(1.0, 1.0)));
        assert_eq!(ip.previous().get(A), Some(Point::new(1.0, 1.0)));
        assert_eq!(ip.current().get(A), Some(Point::new(2.0, 2.0)));
        assert_eq!(ip.timestamp(A), Some(5.0));
    }

    #[test]
    fn single_pointer_delta_is_displacement() {
        let mut ip = tracked(&[(A, Point::new(3.0, 4.0))]);
        ip.update(A, Point::new(10.0, -2.0), 16.0);
        let d = ip.delta().unwrap();
        assert_eq!(
            d,
            InteractionDelta {
                translate: Vec2::new(7.0, -6.0),
                zoom: 1.0,
                rotate: 0.0,
                about: Point::new(10.0, -2.0),
            }
        );
    }

    #[test]
    fn no_paired_points_gives_none() {
        let ip = InteractionPoints::new(TapPolicy::default());
        assert!(ip.delta().is_none());
    }

    #[test]
    fn update_previous_resets_baseline() {
        let mut ip = tracked(&[(A, Point::ORIGIN)]);
        ip.update(A, Point::new(5.0, 0.0), 1.0);
        ip.update_previous();
        let d = ip.delta().unwrap();
        assert_eq!(d.translate, Vec2::ZERO);
    }

    #[test]
    fn pinch_scenario() {
        let mut ip = tracked(&[(A, Point::new(0.0, 0.0)), (B, Point::new(100.0, 0.0))]);
        ip.update(A, Point::new(10.0, 0.0), 16.0);
        ip.update(B, Point::new(130.0, 0.0), 16.0);
        let d = ip.delta().unwrap();
        assert!((d.translate - Vec2::new(20.0, 0.0)).hypot() < 1e-12);
        assert!((d.zoom - 1.2).abs() < 1e-12);
        assert!(d.rotate.abs() < 1e-12);
        assert_eq!(d.about, Point::new(70.0, 0.0));
    }

    #[test]
    fn rotation_about_mean() {
        let center = Point::new(50.0, 50.0);
        let p1 = Point::new(20.0, 50.0);
        let p2 = Point::new(80.0, 50.0);
        let mut ip = tracked(&[(A, p1), (B, p2)]);
        let theta = FRAC_PI_6;
        let rot = |p: Point| center + points::rotate(p - center, theta);
        ip.update(A, rot(p1), 16.0);
        ip.update(B, rot(p2), 16.0);
        let d = ip.delta().unwrap();
        assert!((d.rotate - theta).abs() < 1e-9, "rotate {}", d.rotate);
        assert!((d.zoom - 1.0).abs() < 1e-9);
        assert!(d.translate.hypot() < 1e-9);
    }

    #[test]
    fn coincident_points_do_not_divide_by_zero() {
        let mut ip = tracked(&[(A, Point::ORIGIN), (B, Point::ORIGIN)]);
        ip.update(A, Point::new(1.0, 0.0), 1.0);
        let d = ip.delta().unwrap();
        assert_eq!(d.zoom, 1.0);
    }

    #[test]
    fn three_pointers_reduce_to_farthest_pair() {
        let mut ip = tracked(&[
            (A, Point::new(0.0, 0.0)),
            (B, Point::new(100.0, 0.0)),
            (C, Point::new(50.0, 10.0)),
        ]);
        ip.update(A, Point::new(-50.0, 0.0), 1.0);
        ip.update(B, Point::new(150.0, 0.0), 1.0);
        let d = ip.delta().unwrap();
        assert!((d.zoom - 2.0).abs() < 1e-12);
        assert_eq!(d.about, Point::new(50.0, 0.0));
    }

    #[test]
    fn stop_and_finish_lifecycle() {
        let mut ip = tracked(&[(A, Point::ORIGIN), (B, Point::new(1.0, 1.0))]);
        ip.stop(A, Point::new(2.0, 0.0));
        assert!(!ip.current().contains(A));
        assert!(!ip.previous().contains(A));
        assert_eq!(ip.ended().get(A), Some(Point::new(2.0, 0.0)));
        assert!(ip.start().contains(A));
        assert!(!ip.is_finished());

        // Stopping an inactive key is a no-op.
        ip.stop(C, Point::ORIGIN);
        assert!(!ip.ended().contains(C));

        ip.finish(A);
        assert!(!ip.ended().contains(A));
        assert!(!ip.start().contains(A));
        assert_eq!(ip.timestamp(A), None);

        ip.stop(B, Point::new(1.0, 1.0));
        assert!(ip.is_finished());
    }

    #[test]
    fn tap_and_long_press_classification() {
        let policy = TapPolicy::default();
        let mut ip = InteractionPoints::new(policy);
        ip.update(A, Point::ORIGIN, 1000.0);
        ip.stop(A, Point::new(policy.tap_distance - 1.0, 0.0));

        assert!(ip.is_tap(A, 1000.0 + policy.long_press_time - 1.0));
        assert!(!ip.is_long_press(A, 1000.0 + policy.long_press_time - 1.0));
        assert!(ip.is_long_press(A, 1000.0 + policy.long_press_time + 1.0));
        assert!(!ip.is_tap(A, 1000.0 + policy.long_press_time + 1.0));
        assert!(ip.is_any_tap(1001.0));

        ip.update(B, Point::ORIGIN, 1000.0);
        ip.stop(B, Point::new(policy.tap_distance, 0.0));
        for now in [1000.0, 1400.0, 1600.0, 5000.0] {
            assert!(!ip.is_tap(B, now));
            assert!(!ip.is_long_press(B, now));
        }
    }

    #[test]
    fn moved_and_move_delta() {
        let mut ip = tracked(&[(A, Point::new(0.0, 0.0)), (B, Point::new(10.0, 0.0))]);
        ip.update(A, Point::new(2.0, 0.0), 1.0);
        ip.update(B, Point::new(10.0, 4.0), 1.0);
        assert_eq!(ip.moved(A), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(ip.moved(C), None);
        assert_eq!(ip.move_delta(), Some(Vec2::new(1.0, 2.0)));
    }
}

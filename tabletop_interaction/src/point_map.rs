// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;

use crate::PointerKey;

/// Positions of simultaneous contacts keyed by [`PointerKey`].
#[derive(Clone, Default, PartialEq)]
pub struct PointMap {
    points: HashMap<PointerKey, Point>,
}

impl PointMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Position recorded for `key`.
    #[must_use]
    pub fn get(&self, key: PointerKey) -> Option<Point> {
        self.points.get(&key).copied()
    }

    /// Returns `true` if `key` has a position.
    #[must_use]
    pub fn contains(&self, key: PointerKey) -> bool {
        self.points.contains_key(&key)
    }

    /// Sets the position of `key`, returning the previous one.
    pub fn insert(&mut self, key: PointerKey, point: Point) -> Option<Point> {
        self.points.insert(key, point)
    }

    /// Removes `key`, returning its position.
    pub fn remove(&mut self, key: PointerKey) -> Option<Point> {
        self.points.remove(&key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over `(key, position)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (PointerKey, Point)> + '_ {
        self.points.iter().map(|(k, p)| (*k, *p))
    }

    /// Iterates over keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = PointerKey> + '_ {
        self.points.keys().copied()
    }

    /// Entries sorted by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(PointerKey, Point)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Centroid of all contacts, or `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let sum = self
            .points
            .values()
            .fold(kurbo::Vec2::ZERO, |acc, p| acc + p.to_vec2());
        Some((sum / n).to_point())
    }

    /// The two contacts farthest apart, ordered by key.
    ///
    /// Ties keep the first pair in key order. Returns `None` with fewer than
    /// two contacts.
    #[must_use]
    pub fn farthests(&self) -> Option<[(PointerKey, Point); 2]> {
        let entries = self.sorted();
        let mut best: Option<(f64, usize, usize)> = None;
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let d = entries[i].1.distance(entries[j].1);
                if best.is_none_or(|(max, _, _)| d > max) {
                    best = Some((d, i, j));
                }
            }
        }
        best.map(|(_, i, j)| [entries[i], entries[j]])
    }
}

impl FromIterator<(PointerKey, Point)> for PointMap {
    fn from_iter<I: IntoIterator<Item = (PointerKey, Point)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for PointMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.sorted().into_iter().map(|(k, p)| (k, (p.x, p.y))))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_points() {
        let map: PointMap = [
            (PointerKey::Id(1), Point::new(0.0, 0.0)),
            (PointerKey::Id(2), Point::new(10.0, 0.0)),
            (PointerKey::Id(3), Point::new(5.0, 9.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.mean(), Some(Point::new(5.0, 3.0)));
        assert_eq!(PointMap::new().mean(), None);
    }

    #[test]
    fn farthests_picks_widest_pair_in_key_order() {
        let map: PointMap = [
            (PointerKey::Id(7), Point::new(100.0, 0.0)),
            (PointerKey::Id(2), Point::new(0.0, 0.0)),
            (PointerKey::Id(4), Point::new(40.0, 5.0)),
        ]
        .into_iter()
        .collect();
        let [a, b] = map.farthests().unwrap();
        assert_eq!(a.0, PointerKey::Id(2));
        assert_eq!(b.0, PointerKey::Id(7));
    }

    #[test]
    fn farthests_needs_two_points() {
        let mut map = PointMap::new();
        assert!(map.farthests().is_none());
        map.insert(PointerKey::Mouse, Point::ORIGIN);
        assert!(map.farthests().is_none());
    }
}

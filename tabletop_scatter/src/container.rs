// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use log::{debug, trace};
use tabletop_geometry::Polygon;
use tabletop_interaction::{InputEvent, InteractionTarget, MapperTarget, TargetCapabilities};

use crate::Scatter;

/// Allocator of increasing stacking indices.
///
/// Every call to [`next`](Self::next) returns a value above all previous
/// ones, so the scatter given the latest index is in front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZOrder {
    next: u64,
}

impl ZOrder {
    /// First index handed out.
    pub const START: u64 = 1000;

    /// Creates an allocator starting at [`START`](Self::START).
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Self::START }
    }

    /// Returns a fresh index above all previous ones.
    pub fn next(&mut self) -> u64 {
        let z = self.next;
        self.next += 1;
        z
    }

    /// The index the next call to [`next`](Self::next) returns.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// A stage hosting scatters keyed by a caller-chosen id.
///
/// The container is the [`MapperTarget`] of an
/// [`InteractionMapper`](tabletop_interaction::InteractionMapper): contacts
/// are hit tested against the scatters' outlines front to back, and each
/// scatter receives its own sub-interaction in stage coordinates.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use tabletop_scatter::{ScatterConfig, ScatterContainer};
///
/// let mut stage = ScatterContainer::new(Rect::new(0.0, 0.0, 800.0, 600.0));
/// let card = ScatterConfig::new(Point::new(100.0, 100.0), Size::new(200.0, 100.0))
///     .build()
///     .unwrap();
/// stage.insert("card", card);
/// assert_eq!(stage.get("card").unwrap().stage(), Some(stage.bounds()));
/// assert_eq!(stage.topmost_at(Point::new(150.0, 150.0)), Some("card"));
/// assert_eq!(stage.topmost_at(Point::new(10.0, 10.0)), None);
/// ```
pub struct ScatterContainer<Id> {
    bounds: Rect,
    scatters: HashMap<Id, Scatter>,
    z_order: ZOrder,
    claim_events: bool,
    claimed: Option<Id>,
}

impl<Id: fmt::Debug> fmt::Debug for ScatterContainer<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterContainer")
            .field("bounds", &self.bounds)
            .field("scatters", &self.scatters.len())
            .field("z_order", &self.z_order)
            .field("claim_events", &self.claim_events)
            .field("claimed", &self.claimed)
            .finish()
    }
}

impl<Id: Copy + Eq + Hash + fmt::Debug> ScatterContainer<Id> {
    /// Creates an empty container covering `bounds` in page coordinates.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            scatters: HashMap::new(),
            z_order: ZOrder::new(),
            claim_events: true,
            claimed: None,
        }
    }

    /// Sets whether a hit test records which scatter claimed the event.
    #[must_use]
    pub fn with_claim_events(mut self, claim: bool) -> Self {
        self.claim_events = claim;
        self
    }

    /// Stage rectangle in page coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moves or resizes the stage and tells every scatter about it.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for scatter in self.scatters.values_mut() {
            scatter.set_stage(Some(bounds));
        }
    }

    /// Stage center in stage coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.bounds.width() / 2.0, self.bounds.height() / 2.0)
    }

    /// Stage outline in stage coordinates.
    #[must_use]
    pub fn polygon(&self) -> Polygon {
        Polygon::rect(
            self.center(),
            self.bounds.width(),
            self.bounds.height(),
            0.0,
        )
    }

    /// Adds a scatter in front of all others, replacing any scatter with the
    /// same id.
    pub fn insert(&mut self, id: Id, mut scatter: Scatter) -> Option<Scatter> {
        scatter.set_stage(Some(self.bounds));
        scatter.bring_to_front(&mut self.z_order);
        debug!("added scatter {id:?} at z {}", scatter.z_index());
        self.scatters.insert(id, scatter)
    }

    /// Removes a scatter and detaches it from the stage.
    pub fn remove(&mut self, id: Id) -> Option<Scatter> {
        if self.claimed == Some(id) {
            self.claimed = None;
        }
        let mut scatter = self.scatters.remove(&id)?;
        scatter.set_stage(None);
        debug!("removed scatter {id:?}");
        Some(scatter)
    }

    /// The scatter with this id.
    #[must_use]
    pub fn get(&self, id: Id) -> Option<&Scatter> {
        self.scatters.get(&id)
    }

    /// The scatter with this id, mutably.
    pub fn get_mut(&mut self, id: Id) -> Option<&mut Scatter> {
        self.scatters.get_mut(&id)
    }

    /// Number of hosted scatters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scatters.len()
    }

    /// Returns `true` if no scatter is hosted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scatters.is_empty()
    }

    /// Ids from back to front.
    #[must_use]
    pub fn ids(&self) -> Vec<Id> {
        let mut ids: Vec<_> = self
            .scatters
            .iter()
            .map(|(id, s)| (s.z_index(), *id))
            .collect();
        ids.sort_unstable_by_key(|(z, _)| *z);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Raises a scatter above all others. Returns `false` for an unknown id.
    pub fn bring_to_front(&mut self, id: Id) -> bool {
        match self.scatters.get_mut(&id) {
            Some(scatter) => {
                scatter.bring_to_front(&mut self.z_order);
                true
            }
            None => false,
        }
    }

    /// The front-most scatter whose outline contains `local`, in stage
    /// coordinates.
    #[must_use]
    pub fn topmost_at(&self, local: Point) -> Option<Id> {
        self.scatters
            .iter()
            .filter(|(_, s)| s.polygon().contains_point(local))
            .max_by_key(|(_, s)| s.z_index())
            .map(|(id, _)| *id)
    }

    /// Scatter that claimed the most recent hit test.
    #[must_use]
    pub fn claimed(&self) -> Option<Id> {
        self.claimed
    }

    /// Advances every scatter's animations to `now`. Returns `true` while
    /// any scatter needs more frames.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut animating = false;
        for scatter in self.scatters.values_mut() {
            animating |= scatter.tick(now);
        }
        animating
    }
}

impl<Id: Copy + Eq + Hash + fmt::Debug> MapperTarget for ScatterContainer<Id> {
    type Id = Id;

    fn find_target(&mut self, _: &InputEvent, local: Point, _: Point) -> Option<Id> {
        let id = self.topmost_at(local)?;
        if let Some(scatter) = self
            .scatters
            .get_mut(&id)
            .filter(|s| s.auto_bring_to_front())
        {
            scatter.bring_to_front(&mut self.z_order);
        }
        if self.claim_events {
            self.claimed = Some(id);
        }
        trace!("hit scatter {id:?} at {local:?}");
        Some(id)
    }

    fn map_position_to_point(&self, point: Point) -> Point {
        point - self.bounds.origin().to_vec2()
    }

    fn target_mut(&mut self, id: Id) -> Option<&mut dyn InteractionTarget> {
        self.scatters
            .get_mut(&id)
            .map(|s| s as &mut dyn InteractionTarget)
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::MAPPER_TARGET | TargetCapabilities::MAP_POSITION
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;
    use crate::ScatterConfig;

    fn card(x: f64) -> Scatter {
        ScatterConfig::new(Point::new(x, 0.0), Size::new(100.0, 100.0))
            .build()
            .unwrap()
    }

    #[test]
    fn z_order_increases() {
        let mut z = ZOrder::default();
        assert_eq!(z.next(), ZOrder::START);
        assert_eq!(z.next(), ZOrder::START + 1);
        assert_eq!(z.peek(), ZOrder::START + 2);
    }

    #[test]
    fn later_inserts_are_in_front() {
        let mut stage = ScatterContainer::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        stage.insert(1, card(0.0));
        stage.insert(2, card(50.0));
        assert_eq!(stage.ids(), [1, 2]);
        assert_eq!(stage.topmost_at(Point::new(75.0, 50.0)), Some(2));
        assert!(stage.bring_to_front(1));
        assert_eq!(stage.topmost_at(Point::new(75.0, 50.0)), Some(1));
        assert!(!stage.bring_to_front(3));
    }

    #[test]
    fn bounds_propagate_to_scatters() {
        let mut stage = ScatterContainer::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        stage.insert('a', card(0.0));
        let moved = Rect::new(20.0, 30.0, 220.0, 130.0);
        stage.set_bounds(moved);
        assert_eq!(stage.get('a').unwrap().stage(), Some(moved));
        assert_eq!(stage.center(), Point::new(100.0, 50.0));
        assert_eq!(
            stage.map_position_to_point(Point::new(20.0, 30.0)),
            Point::ORIGIN
        );
        let removed = stage.remove('a').unwrap();
        assert_eq!(removed.stage(), None);
        assert!(stage.is_empty());
    }
}

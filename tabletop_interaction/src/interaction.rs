// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;

use crate::points::{Aspect, InteractionPoints, TapPolicy};
use crate::{PointMap, PointerKey};

/// A gesture session on one input surface, optionally split across several
/// logical targets.
///
/// Every contact is tracked in the session-wide [`InteractionPoints`]. Keys
/// can additionally be routed to a target of type `T`; each target owns a
/// private [`InteractionPoints`] holding only its keys, in its own coordinate
/// space (see [`Interaction::map_interaction`]). A target keeps its
/// sub-interaction for as long as at least one key maps to it.
#[derive(Clone, Debug)]
pub struct Interaction<T> {
    points: InteractionPoints,
    targets: HashMap<PointerKey, T>,
    sub_interactions: HashMap<T, InteractionPoints>,
}

impl<T: Copy + Eq + Hash + Debug> Interaction<T> {
    /// Creates an empty session classifying releases with `tap`.
    #[must_use]
    pub fn new(tap: TapPolicy) -> Self {
        Self {
            points: InteractionPoints::new(tap),
            targets: HashMap::new(),
            sub_interactions: HashMap::new(),
        }
    }

    /// Session-wide contact history.
    #[must_use]
    pub fn points(&self) -> &InteractionPoints {
        &self.points
    }

    /// See [`InteractionPoints::update`].
    pub fn update(&mut self, key: PointerKey, point: Point, time: f64) -> bool {
        self.points.update(key, point, time)
    }

    /// See [`InteractionPoints::update_previous`].
    pub fn update_previous(&mut self) {
        self.points.update_previous();
    }

    /// Ends `key` session-wide and in every sub-interaction.
    pub fn stop(&mut self, key: PointerKey, point: Point) {
        self.points.stop(key, point);
        for sub in self.sub_interactions.values_mut() {
            sub.stop(key, point);
        }
    }

    /// Purges `key` everywhere and unroutes it, dropping its target's
    /// sub-interaction when no other key maps to that target.
    pub fn finish(&mut self, key: PointerKey) {
        self.points.finish(key);
        for sub in self.sub_interactions.values_mut() {
            sub.finish(key);
        }
        self.remove_target(key);
    }

    /// Routes `key` to `target`, creating the target's sub-interaction if it
    /// has none yet.
    pub fn add_target(&mut self, key: PointerKey, target: T) {
        self.targets.insert(key, target);
        let tap = self.points.tap_policy();
        self.sub_interactions
            .entry(target)
            .or_insert_with(|| InteractionPoints::new(tap));
    }

    /// Unroutes `key`. The target's sub-interaction is dropped if no remaining
    /// key maps to the same target.
    pub fn remove_target(&mut self, key: PointerKey) {
        let Some(target) = self.targets.remove(&key) else {
            return;
        };
        if !self.targets.values().any(|t| *t == target) {
            self.sub_interactions.remove(&target);
        }
    }

    /// Target `key` is routed to.
    #[must_use]
    pub fn target_of(&self, key: PointerKey) -> Option<T> {
        self.targets.get(&key).copied()
    }

    /// Private contact history of `target`.
    #[must_use]
    pub fn sub_interaction(&self, target: T) -> Option<&InteractionPoints> {
        self.sub_interactions.get(&target)
    }

    /// Mutable private contact history of `target`.
    pub fn sub_interaction_mut(&mut self, target: T) -> Option<&mut InteractionPoints> {
        self.sub_interactions.get_mut(&target)
    }

    /// Number of targets with a live sub-interaction.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.sub_interactions.len()
    }

    /// Copies the selected `aspects` of every key in `keys` into the
    /// sub-interaction of the key's target, passing positions through `map`.
    ///
    /// Keys without a target are skipped. Press timestamps follow the keys
    /// so that sub-interactions can classify taps on their own. Returns each
    /// affected target once, in first-seen order, for the caller to dispatch.
    pub fn map_interaction(
        &mut self,
        keys: &PointMap,
        aspects: &[Aspect],
        mut map: impl FnMut(Point) -> Point,
    ) -> Vec<T> {
        let mut touched = Vec::new();
        for (key, _) in keys.sorted() {
            let Some(target) = self.targets.get(&key).copied() else {
                continue;
            };
            let Some(sub) = self.sub_interactions.get_mut(&target) else {
                continue;
            };
            for aspect in aspects {
                if let Some(point) = self.points.aspect(*aspect).get(key) {
                    sub.aspect_mut(*aspect).insert(key, map(point));
                }
            }
            if let Some(time) = self.points.timestamp(key) {
                sub.set_timestamp_if_absent(key, time);
            }
            if !touched.contains(&target) {
                touched.push(target);
            }
        }
        touched
    }
}

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::Hash;

use kurbo::Point;

use crate::event::{InputEvent, WheelInput};
use crate::points::InteractionPoints;
use crate::PointerKey;

bitflags::bitflags! {
    /// Callbacks a target declares it implements.
    ///
    /// Statically typed targets get the required callbacks from the trait, so
    /// this only matters for dynamic targets (plugin-style adapters) that
    /// forward to something resolved at run time. Delegates check it when
    /// [`DelegateOptions::check_conformance`](crate::DelegateOptions::check_conformance)
    /// is on.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TargetCapabilities: u8 {
        /// `capture`.
        const CAPTURE = 1;
        /// `on_start`.
        const START = 1 << 1;
        /// `on_move`.
        const MOVE = 1 << 2;
        /// `on_end`.
        const END = 1 << 3;
        /// `on_mouse_wheel`.
        const WHEEL = 1 << 4;
        /// `find_target`.
        const FIND_TARGET = 1 << 5;
        /// `map_position_to_point`.
        const MAP_POSITION = 1 << 6;

        /// Required by an [`InteractionDelegate`](crate::InteractionDelegate) target.
        const INTERACTION_TARGET = Self::CAPTURE.bits()
            | Self::START.bits()
            | Self::MOVE.bits()
            | Self::END.bits();
        /// Required by an [`InteractionMapper`](crate::InteractionMapper) target.
        const MAPPER_TARGET = Self::CAPTURE.bits() | Self::FIND_TARGET.bits();
    }
}

/// Which contract a conformance check was run against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRole {
    /// [`InteractionTarget`].
    InteractionTarget,
    /// [`MapperTarget`].
    MapperTarget,
}

/// A target does not declare every callback its role requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConformanceError {
    /// Contract that was checked.
    pub role: TargetRole,
    /// Required callbacks the target did not declare.
    pub missing: TargetCapabilities,
}

impl ConformanceError {
    pub(crate) fn check(
        role: TargetRole,
        declared: TargetCapabilities,
        required: TargetCapabilities,
    ) -> Result<(), Self> {
        let missing = required.difference(declared);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Self { role, missing })
        }
    }
}

impl fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            TargetRole::InteractionTarget => "InteractionTarget",
            TargetRole::MapperTarget => "MapperTarget",
        };
        write!(f, "expected {role}: missing")?;
        for (name, _) in self.missing.iter_names() {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}

impl core::error::Error for ConformanceError {}

/// Receiver of normalized gesture callbacks.
///
/// `interaction` is the contact history the target should read: the whole
/// session for an [`InteractionDelegate`](crate::InteractionDelegate), or the
/// target's own mapped sub-interaction for an
/// [`InteractionMapper`](crate::InteractionMapper).
pub trait InteractionTarget {
    /// Whether to claim a starting contact or wheel event at all.
    fn capture(&mut self, event: &InputEvent) -> bool {
        let _ = event;
        true
    }

    /// One or more contacts started.
    fn on_start(&mut self, event: &InputEvent, interaction: &InteractionPoints);

    /// Contacts moved. `previous` still holds the last frame's positions.
    fn on_move(&mut self, event: &InputEvent, interaction: &InteractionPoints);

    /// Contacts were released; `ended` holds their release positions.
    fn on_end(&mut self, event: &InputEvent, interaction: &InteractionPoints);

    /// Wheel input. Only delivered if [`capabilities`](Self::capabilities)
    /// contains [`TargetCapabilities::WHEEL`].
    fn on_mouse_wheel(&mut self, event: &WheelInput) {
        let _ = event;
    }

    /// Callbacks this target implements.
    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::INTERACTION_TARGET
    }

    /// A delegate registered a new contact.
    fn interaction_started(&mut self, event: &InputEvent, key: PointerKey, point: Point) {
        let _ = (event, key, point);
    }

    /// A delegate stopped a contact, before `on_end`.
    fn interaction_ended(&mut self, event: &InputEvent, key: PointerKey, point: Point) {
        let _ = (event, key, point);
    }

    /// A delegate purged a contact, after `on_end`.
    fn interaction_finished(&mut self, event: &InputEvent, key: PointerKey, point: Point) {
        let _ = (event, key, point);
    }
}

/// A surface that hosts several independent [`InteractionTarget`]s.
pub trait MapperTarget {
    /// Handle identifying a hosted target.
    type Id: Copy + Eq + Hash + fmt::Debug;

    /// Whether to claim a starting contact or wheel event at all.
    fn capture(&mut self, event: &InputEvent) -> bool {
        let _ = event;
        true
    }

    /// Hit test: which hosted target, if any, lies under a new contact.
    ///
    /// `local` is `global` passed through
    /// [`map_position_to_point`](Self::map_position_to_point).
    fn find_target(&mut self, event: &InputEvent, local: Point, global: Point) -> Option<Self::Id>;

    /// Converts a page position into the surface's local coordinates.
    fn map_position_to_point(&self, point: Point) -> Point {
        point
    }

    /// Resolves a handle returned by [`find_target`](Self::find_target).
    fn target_mut(&mut self, id: Self::Id) -> Option<&mut dyn InteractionTarget>;

    /// Wheel input that no hosted target accepted. Only delivered if
    /// [`capabilities`](Self::capabilities) contains [`TargetCapabilities::WHEEL`].
    fn on_mouse_wheel(&mut self, event: &WheelInput) {
        let _ = event;
    }

    /// Callbacks this surface implements.
    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::MAPPER_TARGET | TargetCapabilities::MAP_POSITION
    }
}

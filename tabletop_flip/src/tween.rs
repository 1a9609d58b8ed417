// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Handle of a scheduled tween, chosen by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u64);

/// Visual part of a card a tween applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The card's outer element, which carries the scatter transform.
    Element,
    /// The inner card that turns around its vertical axis.
    Card,
    /// Front face.
    Front,
    /// Back face.
    Back,
    /// Button that flips to the back.
    InfoButton,
    /// Button that flips back to the front.
    BackButton,
    /// Button that closes the card.
    CloseButton,
}

/// Property bag for a tween or an immediate set. `None` leaves a property
/// alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Properties {
    /// Horizontal translation.
    pub x: Option<f64>,
    /// Vertical translation.
    pub y: Option<f64>,
    /// Uniform scale.
    pub scale: Option<f64>,
    /// Rotation around the vertical axis, in degrees.
    pub rotation_y: Option<f64>,
    /// Rotation in the plane, in degrees.
    pub rotation_z: Option<f64>,
    /// Layout width.
    pub width: Option<f64>,
    /// Layout height.
    pub height: Option<f64>,
    /// Whether the part is shown.
    pub visible: Option<bool>,
}

impl Properties {
    /// Only visibility.
    #[must_use]
    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Self::default()
        }
    }

    /// Only scale.
    #[must_use]
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }
}

/// Host animation engine.
///
/// `Id` names the card, `Part` the piece of it. The scheduler interpolates
/// the given properties and, when a tween returned by [`to`](Self::to)
/// finishes, the host reports it with
/// [`Flippable::tween_completed`](crate::Flippable::tween_completed).
pub trait TweenScheduler<Id> {
    /// Applies `properties` immediately.
    fn set(&mut self, card: Id, part: Part, properties: &Properties);

    /// Animates toward `properties` over `duration` seconds.
    fn to(&mut self, card: Id, part: Part, duration: f64, properties: &Properties) -> TweenId;
}

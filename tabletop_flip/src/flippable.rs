// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::{Drain, Vec};
use core::fmt;
use core::hash::Hash;

use kurbo::{Point, Size};
use log::debug;
use tabletop_scatter::{ScatterContainer, ScatterFlags};

use crate::{Part, Properties, TweenId, TweenScheduler};

/// Scale a closing card shrinks to before it is removed.
pub const CLOSE_SCALE: f64 = 0.1;

/// Duration of the closing animation, in seconds.
pub const CLOSE_DURATION: f64 = 0.5;

const GESTURE_FLAGS: ScatterFlags = ScatterFlags::SCALABLE
    .union(ScatterFlags::TRANSLATABLE)
    .union(ScatterFlags::ROTATABLE);

/// Planar rotation, in degrees, that turns `alpha` to the nearest multiple
/// of 90 degrees.
///
/// The remainder keeps the sign of `alpha`, so negative angles always turn
/// back toward zero.
///
/// ```
/// use tabletop_flip::target_rotation;
///
/// assert_eq!(target_rotation(30.0), -30.0);
/// assert_eq!(target_rotation(60.0), 30.0);
/// assert_eq!(target_rotation(-30.0), 30.0);
/// ```
#[must_use]
pub fn target_rotation(alpha: f64) -> f64 {
    let rest = alpha % 90.0;
    if rest > 45.0 { 90.0 - rest } else { -rest }
}

/// Layout of the back face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackFace {
    /// Unscaled size the card takes while showing its back.
    pub size: Size,
    /// Scale the card takes while showing its back.
    pub scale: f64,
}

/// Options for one flip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipOptions {
    /// Length of the turn, in seconds. Resizing and moving take half of it.
    pub duration: f64,
    /// Where to center the back face, in stage coordinates. By default the
    /// back face grows around the front face's center.
    pub target_center: Option<Point>,
}

impl Default for FlipOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            target_center: None,
        }
    }
}

impl FlipOptions {
    /// Sets the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the back face center.
    #[must_use]
    pub fn with_target_center(mut self, center: Point) -> Self {
        self.target_center = Some(center);
        self
    }
}

/// Lifecycle notification, collected until [`Flippable::drain_events`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipEvent {
    /// Turned to the back.
    FrontFlipped,
    /// Turned back to the front.
    BackFlipped,
    /// Closing started.
    Closed,
    /// Closing finished and the scatter left its container.
    Removed,
}

/// A flip request that cannot be carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipError {
    /// The container has no scatter with the card's id.
    UnknownScatter,
    /// The previous flip has not completed yet.
    InProgress,
}

impl fmt::Display for FlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownScatter => "no scatter for this card",
            Self::InProgress => "card is still flipping",
        })
    }
}

impl core::error::Error for FlipError {}

#[derive(Clone, Copy, Debug, PartialEq)]
struct FrontState {
    position: Point,
    rotation_degrees: f64,
    scale: f64,
    size: Size,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingFlip {
    card: TweenId,
    position: Point,
    rotation_degrees: f64,
    scale: f64,
    size: Size,
    saved_flags: ScatterFlags,
}

/// A two-faced card over one scatter of a [`ScatterContainer`].
///
/// Flipping freezes the scatter's gestures, turns the card while the host
/// scheduler resizes and moves it to the other face's layout, and commits
/// the final layout to the scatter once the turn completes.
#[derive(Debug)]
pub struct Flippable<Id> {
    id: Id,
    back: BackFace,
    flipped: bool,
    front: Option<FrontState>,
    pending: Option<PendingFlip>,
    face_tween: Option<(TweenId, Part)>,
    closing: Option<TweenId>,
    events: Vec<FlipEvent>,
}

impl<Id: Copy + Eq + Hash + fmt::Debug> Flippable<Id> {
    /// Sets up the card faces for the scatter `id` and raises it.
    pub fn new(
        id: Id,
        back: BackFace,
        container: &mut ScatterContainer<Id>,
        scheduler: &mut impl TweenScheduler<Id>,
    ) -> Result<Self, FlipError> {
        let scale = container.get(id).ok_or(FlipError::UnknownScatter)?.scale();
        scheduler.set(
            id,
            Part::Back,
            &Properties {
                rotation_y: Some(-180.0),
                visible: Some(false),
                ..Properties::default()
            },
        );
        scheduler.set(id, Part::Front, &Properties::visible(true));
        scheduler.set(id, Part::InfoButton, &Properties::visible(true));
        scheduler.set(id, Part::CloseButton, &Properties::visible(true));
        scheduler.set(id, Part::BackButton, &Properties::visible(false));
        let flippable = Self {
            id,
            back,
            flipped: false,
            front: None,
            pending: None,
            face_tween: None,
            closing: None,
            events: Vec::new(),
        };
        flippable.scale_buttons_to(scale, scheduler);
        container.bring_to_front(id);
        Ok(flippable)
    }

    /// Id of the card's scatter.
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns `true` while the back face is up, or turning up.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Returns `true` between [`start`](Self::start) and the completion of
    /// its turn.
    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.pending.is_some()
    }

    /// Back face layout.
    #[must_use]
    pub fn back_face(&self) -> BackFace {
        self.back
    }

    /// Replaces the back face layout, for example once its content loaded.
    pub fn set_back_face(&mut self, back: BackFace) {
        self.back = back;
    }

    /// Turns the card to its other face.
    ///
    /// Turning to the back remembers the front layout, snaps the rotation to
    /// the nearest right angle and moves to the back face layout. Turning to
    /// the front returns to the remembered layout.
    pub fn start(
        &mut self,
        options: FlipOptions,
        container: &mut ScatterContainer<Id>,
        scheduler: &mut impl TweenScheduler<Id>,
    ) -> Result<(), FlipError> {
        if self.pending.is_some() {
            return Err(FlipError::InProgress);
        }
        let id = self.id;
        if !container.bring_to_front(id) {
            return Err(FlipError::UnknownScatter);
        }
        let scatter = container.get_mut(id).ok_or(FlipError::UnknownScatter)?;

        let front = match self.front {
            Some(front) if self.flipped => {
                scheduler.set(id, Part::Front, &Properties::visible(true));
                scheduler.set(id, Part::BackButton, &Properties::visible(false));
                front
            }
            _ => {
                let front = FrontState {
                    position: scatter.position(),
                    rotation_degrees: scatter.rotation_degrees(),
                    scale: scatter.scale(),
                    size: scatter.size(),
                };
                self.front = Some(front);
                scheduler.set(id, Part::Back, &Properties::visible(true));
                scheduler.set(id, Part::InfoButton, &Properties::visible(false));
                scheduler.set(id, Part::CloseButton, &Properties::visible(false));
                front
            }
        };

        let flags = scatter.flags();
        scatter.set_flags(flags - GESTURE_FLAGS);
        scatter.kill_animation();
        scatter.cancel_zoom_bounce();
        self.flipped = !self.flipped;

        let (rotation_y, rotation_degrees, scale, size) = if self.flipped {
            let alpha = front.rotation_degrees;
            (180.0, alpha + target_rotation(alpha), self.back.scale, self.back.size)
        } else {
            (0.0, front.rotation_degrees, front.scale, front.size)
        };
        let position = match (self.flipped, options.target_center) {
            (false, _) => front.position,
            (true, Some(center)) => {
                Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
            }
            (true, None) => {
                let grow = self.back.size - scatter.size();
                Point::new(
                    front.position.x - grow.width / 2.0,
                    front.position.y - grow.height / 2.0,
                )
            }
        };

        let card = scheduler.to(
            id,
            Part::Card,
            options.duration,
            &Properties {
                rotation_y: Some(rotation_y),
                ..Properties::default()
            },
        );
        let element = scheduler.to(
            id,
            Part::Element,
            options.duration / 2.0,
            &Properties {
                x: Some(position.x),
                y: Some(position.y),
                scale: Some(scale),
                rotation_z: Some(rotation_degrees),
                width: Some(size.width),
                height: Some(size.height),
                ..Properties::default()
            },
        );
        let hidden = if self.flipped { Part::Front } else { Part::Back };
        self.face_tween = Some((element, hidden));
        self.pending = Some(PendingFlip {
            card,
            position,
            rotation_degrees,
            scale,
            size,
            saved_flags: flags & GESTURE_FLAGS,
        });
        debug!(
            "card {id:?} turning to its {}",
            if self.flipped { "back" } else { "front" }
        );
        Ok(())
    }

    /// Reacts to a finished tween. Returns `false` if the tween does not
    /// belong to this card.
    pub fn tween_completed(
        &mut self,
        tween: TweenId,
        container: &mut ScatterContainer<Id>,
        scheduler: &mut impl TweenScheduler<Id>,
    ) -> bool {
        let id = self.id;
        if self.closing == Some(tween) {
            self.closing = None;
            container.remove(id);
            self.events.push(FlipEvent::Removed);
            return true;
        }
        if let Some((_, hidden)) = self.face_tween.filter(|(element, _)| *element == tween) {
            self.face_tween = None;
            scheduler.set(id, hidden, &Properties::visible(false));
            return true;
        }
        let Some(pending) = self.pending.filter(|p| p.card == tween) else {
            return false;
        };
        self.pending = None;

        if self.flipped {
            scheduler.set(id, Part::BackButton, &Properties::visible(true));
            self.events.push(FlipEvent::FrontFlipped);
        } else {
            scheduler.set(id, Part::InfoButton, &Properties::visible(true));
            scheduler.set(id, Part::CloseButton, &Properties::visible(true));
            self.events.push(FlipEvent::BackFlipped);
        }
        if let Some(scatter) = container.get_mut(id) {
            scatter.set_scale(pending.scale);
            scatter.set_rotation_degrees(pending.rotation_degrees);
            scatter.set_size(pending.size);
            scatter.set_position(pending.position);
            scatter.set_flags((scatter.flags() - GESTURE_FLAGS) | pending.saved_flags);
        }
        self.scale_buttons_to(pending.scale, scheduler);
        container.bring_to_front(id);
        debug!("card {id:?} finished turning");
        true
    }

    /// Hides the buttons and shrinks the card away. The scatter is removed
    /// from the container once the animation completes.
    pub fn close(
        &mut self,
        container: &ScatterContainer<Id>,
        scheduler: &mut impl TweenScheduler<Id>,
    ) -> Result<(), FlipError> {
        if container.get(self.id).is_none() {
            return Err(FlipError::UnknownScatter);
        }
        if self.closing.is_some() {
            return Ok(());
        }
        scheduler.set(self.id, Part::InfoButton, &Properties::visible(false));
        scheduler.set(self.id, Part::CloseButton, &Properties::visible(false));
        let tween = scheduler.to(
            self.id,
            Part::Element,
            CLOSE_DURATION,
            &Properties::scaled(CLOSE_SCALE),
        );
        self.closing = Some(tween);
        self.events.push(FlipEvent::Closed);
        Ok(())
    }

    /// Moves the card's center to `point`.
    pub fn center_at(&self, point: Point, container: &mut ScatterContainer<Id>) {
        if let Some(scatter) = container.get_mut(self.id) {
            scatter.center_at(point);
        }
    }

    /// Sets the card's scale immediately.
    pub fn zoom(&self, scale: f64, container: &mut ScatterContainer<Id>) {
        if let Some(scatter) = container.get_mut(self.id) {
            scatter.zoom(scale, None);
        }
    }

    /// Scale that keeps overlay buttons at their natural size on the card.
    #[must_use]
    pub fn button_scale(&self, container: &ScatterContainer<Id>) -> f64 {
        container.get(self.id).map_or(1.0, |s| 1.0 / s.scale())
    }

    /// Rescales the overlay buttons to the card's current scale. Call after
    /// the scatter was transformed.
    pub fn scale_buttons(
        &self,
        container: &ScatterContainer<Id>,
        scheduler: &mut impl TweenScheduler<Id>,
    ) {
        let scale = container.get(self.id).map_or(1.0, |s| s.scale());
        self.scale_buttons_to(scale, scheduler);
    }

    fn scale_buttons_to(&self, scale: f64, scheduler: &mut impl TweenScheduler<Id>) {
        let inverse = Properties::scaled(1.0 / scale);
        for part in [Part::InfoButton, Part::BackButton, Part::CloseButton] {
            scheduler.set(self.id, part, &inverse);
        }
    }

    /// Takes the notifications collected so far.
    pub fn drain_events(&mut self) -> Drain<'_, FlipEvent> {
        self.events.drain(..)
    }
}

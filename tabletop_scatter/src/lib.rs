// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tabletop_scatter --heading-base-level=0

//! Tabletop Scatter: objects on a stage that can be dragged, pinched, rotated
//! and thrown.
//!
//! A [`Scatter`] owns the placement of one rectangular object: position and
//! size of its unscaled layout box, a scale factor and a rotation. Gesture
//! deltas are applied with [`Scatter::transform`], which keeps the gesture's
//! pivot fixed while zooming and rotating, clamps the scale (allowing a
//! configurable overzoom during the gesture) and reports every committed
//! change to transform listeners as a [`ScatterEvent`].
//!
//! A [`ScatterContainer`] hosts many scatters on one stage. It is the
//! surface an [`InteractionMapper`](tabletop_interaction::InteractionMapper)
//! hit tests against, so a single mapper routes every contact to the
//! front-most scatter under it and each scatter sees only its own contacts.
//!
//! When a gesture ends the scatter is thrown with the recent drag velocity
//! and kept on stage: if less than its throw visibility remains in view it is
//! nudged back toward the stage center and its velocity is reflected off the
//! crossed edge. Overzoomed scatters ease back into their scale bounds.
//! Both animations advance only when the host calls
//! [`ScatterContainer::tick`] (or [`Scatter::tick`]) with its frame time.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use tabletop_interaction::{
//!     DelegateOptions, InputEvent, InteractionMapper, Phase, PointerInput, PointerType,
//! };
//! use tabletop_scatter::{ScatterConfig, ScatterContainer};
//!
//! let mut stage = ScatterContainer::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let photo = ScatterConfig::new(Point::new(100.0, 100.0), Size::new(200.0, 150.0))
//!     .build()
//!     .unwrap();
//! stage.insert("photo", photo);
//!
//! let mut mapper = InteractionMapper::new(stage, DelegateOptions::default()).unwrap();
//! let finger = |phase, x, t| {
//!     InputEvent::Pointer(
//!         phase,
//!         PointerInput::new(1, PointerType::Touch, Point::new(x, 150.0), t),
//!     )
//! };
//! mapper.handle(&finger(Phase::Down, 150.0, 0.0));
//! for frame in 1..=4 {
//!     let x = 150.0 + 10.0 * f64::from(frame);
//!     mapper.handle(&finger(Phase::Move, x, 16.0 * f64::from(frame)));
//! }
//! mapper.handle(&finger(Phase::Up, 190.0, 80.0));
//!
//! let stage = mapper.target_mut();
//! assert_eq!(stage.get("photo").unwrap().position(), Point::new(140.0, 100.0));
//!
//! // Released while moving: the photo coasts until it comes to rest.
//! let mut now = 80.0;
//! while stage.tick(now) {
//!     now += 16.0;
//! }
//! assert!(stage.get("photo").unwrap().position().x > 140.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod container;
mod event;
mod scatter;

pub use config::{ConfigError, ScatterConfig, ScatterFlags};
pub use container::{ScatterContainer, ZOrder};
pub use event::{EventType, ResizeEvent, ScatterEvent};
pub use scatter::{
    COLLISION_DAMPING, GESTURE_BOUNCE_DELAY, Scatter, ScatterState, WHEEL_BOUNCE_DELAY,
    WHEEL_ROTATION_DEGREES, ZOOM_BOUNCE_STEP,
};

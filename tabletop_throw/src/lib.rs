// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tabletop_throw --heading-base-level=0

//! Tabletop Throw: inertia for objects released mid-drag.
//!
//! A [`Throwable`] samples the displacement of a dragged object frame by
//! frame. On release it averages the last few samples into a velocity and
//! coasts the object with exponential damping, one [`Throwable::tick`] per
//! animation frame, until the object comes to rest.
//!
//! The moved object implements [`ThrowBody`]. Its
//! [`next_velocity`](ThrowBody::next_velocity) hook is where containment
//! lives: a body that bounces off the edges of its stage reflects and damps
//! the velocity there, and reports [`is_outside`](ThrowBody::is_outside) until
//! it is back in view.
//!
//! There is no clock. Every call takes the host's frame time in milliseconds,
//! and the throw continues exactly as long as its state says it should.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use tabletop_throw::{ThrowBody, ThrowStatus, Throwable};
//!
//! struct Puck(Point);
//!
//! impl ThrowBody for Puck {
//!     fn move_by(&mut self, delta: Vec2) {
//!         self.0 += delta;
//!     }
//! }
//!
//! let mut puck = Puck(Point::ORIGIN);
//! let mut throwable = Throwable::default();
//!
//! // Dragged 16 px per 16 ms frame, then released.
//! throwable.observe_velocity(0.0);
//! for frame in 1..=4 {
//!     let now = f64::from(frame) * 16.0;
//!     puck.move_by(Vec2::new(16.0, 0.0));
//!     throwable.add_velocity(Vec2::new(16.0, 0.0), now);
//! }
//! assert_eq!(throwable.start_throw(64.0, &mut puck), ThrowStatus::Running);
//!
//! let mut now = 64.0;
//! while throwable.tick(now + 16.0, &mut puck) == ThrowStatus::Running {
//!     now += 16.0;
//! }
//! assert!(puck.0.x > 64.0);
//! assert!(!throwable.is_throwing());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod body;
mod throwable;

pub use body::ThrowBody;
pub use throwable::{REST_SPEED, ThrowConfig, ThrowStatus, Throwable, VelocitySample};

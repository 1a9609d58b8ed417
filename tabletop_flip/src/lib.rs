// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tabletop_flip --heading-base-level=0

//! Tabletop Flip: cards with a front and a back face.
//!
//! A [`Flippable`] sits on top of one scatter in a
//! [`ScatterContainer`](tabletop_scatter::ScatterContainer). Flipping turns
//! the card around its vertical axis while it grows (or shrinks) to the
//! other face's layout. Animation is the host's job: every visual change goes
//! through a [`TweenScheduler`], and the host reports finished tweens back
//! with [`Flippable::tween_completed`]. Lifecycle notifications are queued as
//! [`FlipEvent`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use tabletop_flip::{
//!     BackFace, FlipEvent, FlipOptions, Flippable, Part, Properties, TweenId, TweenScheduler,
//! };
//! use tabletop_scatter::{ScatterConfig, ScatterContainer};
//!
//! /// Finishes nothing by itself; remembers the tweens it was asked for.
//! #[derive(Default)]
//! struct Tweens(Vec<TweenId>);
//!
//! impl TweenScheduler<u32> for Tweens {
//!     fn set(&mut self, _: u32, _: Part, _: &Properties) {}
//!     fn to(&mut self, _: u32, _: Part, _: f64, _: &Properties) -> TweenId {
//!         let id = TweenId(self.0.len() as u64);
//!         self.0.push(id);
//!         id
//!     }
//! }
//!
//! let mut stage = ScatterContainer::new(Rect::new(0.0, 0.0, 1024.0, 768.0));
//! let front = ScatterConfig::new(Point::new(100.0, 100.0), Size::new(200.0, 100.0))
//!     .build()
//!     .unwrap();
//! stage.insert(7, front);
//!
//! let mut tweens = Tweens::default();
//! let back = BackFace { size: Size::new(400.0, 300.0), scale: 1.0 };
//! let mut card = Flippable::new(7, back, &mut stage, &mut tweens).unwrap();
//! card.start(FlipOptions::default(), &mut stage, &mut tweens).unwrap();
//!
//! // The host animated both tweens to the end.
//! for tween in tweens.0.clone() {
//!     card.tween_completed(tween, &mut stage, &mut tweens);
//! }
//! assert_eq!(card.drain_events().collect::<Vec<_>>(), [FlipEvent::FrontFlipped]);
//! assert_eq!(stage.get(7).unwrap().size(), Size::new(400.0, 300.0));
//! // Grown around the front face's center.
//! assert_eq!(stage.get(7).unwrap().center(), Point::new(200.0, 150.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flippable;
mod tween;

pub use flippable::{
    BackFace, CLOSE_DURATION, CLOSE_SCALE, FlipError, FlipEvent, FlipOptions, Flippable,
    target_rotation,
};
pub use tween::{Part, Properties, TweenId, TweenScheduler};

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tabletop_interaction --heading-base-level=0

//! Tabletop Interaction: multi-pointer gesture tracking and dispatch.
//!
//! Raw input from any of the three platform families (pointer, touch, mouse)
//! is normalized into keyed contact positions, tracked over the life of a
//! gesture, and turned into per-frame translation, zoom and rotation deltas
//! that a target can apply directly.
//!
//! - [`InputEvent`] and friends: a platform-neutral model of the raw events.
//! - [`extract_points`]: the normalization rules, one [`PointerKey`] per
//!   active contact.
//! - [`InteractionPoints`]: current, previous, start and ended positions per
//!   contact, plus tap and long-press classification and [`InteractionDelta`]
//!   computation.
//! - [`Interaction`]: a session that can be split across several logical
//!   targets, each with its own sub-interaction in its own coordinate space.
//! - [`InteractionDelegate`]: drives one [`InteractionTarget`].
//! - [`InteractionMapper`]: hit-tests new contacts and drives the targets a
//!   [`MapperTarget`] hosts.
//! - [`EventRecorder`]: an optional ring buffer of raw events that can be
//!   replayed into any [`EventSink`].
//!
//! ## Design notes
//!
//! Callers own the event loop. Events are fed in one at a time through
//! `handle`; the returned [`Response`] says whether the contact was claimed
//! and which pointer should be captured or released. Timestamps are
//! milliseconds supplied by the caller, so the whole pipeline is
//! deterministic and can be replayed from a recording.
//!
//! A delegate listens to exactly one event family ([`InputApi`]), picked from
//! what the platform supports. Wheel events are accepted under every family.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tabletop_interaction::{InteractionPoints, PointerKey, TapPolicy};
//!
//! let mut points = InteractionPoints::new(TapPolicy::default());
//! let (a, b) = (PointerKey::Id(1), PointerKey::Id(2));
//! points.update(a, Point::new(0.0, 0.0), 0.0);
//! points.update(b, Point::new(10.0, 0.0), 0.0);
//! points.update_previous();
//!
//! // Spread the two fingers apart symmetrically.
//! points.update(a, Point::new(-5.0, 0.0), 16.0);
//! points.update(b, Point::new(15.0, 0.0), 16.0);
//!
//! let delta = points.delta().unwrap();
//! assert_eq!(delta.zoom, 2.0);
//! assert_eq!(delta.rotate, 0.0);
//! assert_eq!(delta.about, Point::new(5.0, 0.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod api;
mod delegate;
mod event;
mod interaction;
mod key;
mod mapper;
mod normalize;
mod point_map;
mod points;
mod recorder;
mod target;

pub use api::{InputApi, PlatformCapabilities, StaticCapabilities};
pub use delegate::{DelegateOptions, InteractionDelegate, Response};
pub use event::{
    Buttons, InputEvent, InputFamily, Modifiers, MouseInput, Phase, PointerInput, PointerType,
    Touch, TouchInput, TouchType, WheelInput,
};
pub use interaction::Interaction;
pub use key::{ParseKeyError, PointerKey};
pub use mapper::InteractionMapper;
pub use normalize::{extract_points, touch_key};
pub use point_map::PointMap;
pub use points::{Aspect, InteractionDelta, InteractionPoints, TapPolicy};
pub use recorder::{EventRecorder, EventSink, RecordedEvent, replay};
pub use target::{
    ConformanceError, InteractionTarget, MapperTarget, TargetCapabilities, TargetRole,
};

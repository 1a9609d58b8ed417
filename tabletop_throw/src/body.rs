// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// The object a [`Throwable`](crate::Throwable) moves.
///
/// Only [`move_by`](Self::move_by) is required. Override
/// [`next_velocity`](Self::next_velocity) to add containment or a different
/// friction model.
pub trait ThrowBody {
    /// Moves the object by `delta`.
    fn move_by(&mut self, delta: Vec2);

    /// Velocity for the next frame. Defaults to plain exponential damping.
    fn next_velocity(&mut self, velocity: Vec2, damping: f64) -> Vec2 {
        velocity * damping
    }

    /// Whether the object is still outside its allowed area, which keeps the
    /// throw running even at rest speed.
    fn is_outside(&self) -> bool {
        false
    }

    /// The object was moved by a throw frame.
    fn on_drag_update(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// The throw came to rest.
    fn on_drag_complete(&mut self) {}
}

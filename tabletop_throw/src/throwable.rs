// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use kurbo::Vec2;
use log::{debug, warn};

use crate::ThrowBody;

/// Speed (pixels per millisecond) below which a throw comes to rest.
pub const REST_SPEED: f64 = 0.01;

/// Tuning for a [`Throwable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrowConfig {
    /// Per-frame velocity factor while coasting.
    pub throw_damping: f64,
    /// Whether [`Throwable::start_throw`] puts the throw in motion on its own.
    pub auto_throw: bool,
    /// Number of velocity samples retained.
    pub buffer: usize,
    /// Averaging window for the release velocity, in milliseconds.
    pub window_ms: f64,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            throw_damping: 0.95,
            auto_throw: true,
            buffer: 5,
            window_ms: 30.0,
        }
    }
}

impl ThrowConfig {
    /// Sets the per-frame damping factor.
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.throw_damping = damping;
        self
    }

    /// Enables or disables self-driven throws.
    #[must_use]
    pub fn with_auto_throw(mut self, auto_throw: bool) -> Self {
        self.auto_throw = auto_throw;
        self
    }
}

/// One frame of observed motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    /// Frame time in milliseconds.
    pub t: f64,
    /// Milliseconds since the previous sample.
    pub dt: f64,
    /// Displacement during the frame.
    pub delta: Vec2,
}

/// Outcome of a throw frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowStatus {
    /// No throw in progress.
    Idle,
    /// The throw continues; tick again next frame.
    Running,
    /// The throw came to rest this frame.
    Completed,
}

/// Inertia state for one draggable object.
///
/// While dragging, feed each frame's displacement into
/// [`add_velocity`](Self::add_velocity). On release,
/// [`start_throw`](Self::start_throw) averages the most recent samples into a
/// velocity, and each subsequent [`tick`](Self::tick) moves the body by that
/// velocity and damps it, until it drops below [`REST_SPEED`] with the body
/// inside its bounds.
///
/// Velocities are in pixels per millisecond.
#[derive(Clone, Debug)]
pub struct Throwable {
    config: ThrowConfig,
    samples: VecDeque<VelocitySample>,
    last_frame: Option<f64>,
    velocity: Option<Vec2>,
}

impl Throwable {
    /// Creates an idle throwable.
    #[must_use]
    pub fn new(config: ThrowConfig) -> Self {
        Self {
            config,
            samples: VecDeque::new(),
            last_frame: None,
            velocity: None,
        }
    }

    /// Current tuning.
    #[must_use]
    pub fn config(&self) -> &ThrowConfig {
        &self.config
    }

    /// Mutable tuning. Takes effect from the next sample or frame.
    pub fn config_mut(&mut self) -> &mut ThrowConfig {
        &mut self.config
    }

    /// Marks `now` as the reference time for the next sample.
    pub fn observe_velocity(&mut self, now: f64) {
        self.last_frame = Some(now);
    }

    /// Records that the object moved by `delta` during the frame ending at `now`.
    ///
    /// Only the latest [`ThrowConfig::buffer`] samples are kept.
    pub fn add_velocity(&mut self, delta: Vec2, now: f64) {
        let dt = now - self.last_frame.unwrap_or(now);
        self.last_frame = Some(now);
        self.samples.push_back(VelocitySample { t: now, dt, delta });
        while self.samples.len() > self.config.buffer {
            self.samples.pop_front();
        }
    }

    /// Retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &VelocitySample> + '_ {
        self.samples.iter()
    }

    /// Mean velocity over the most recent `window_ms` of samples.
    ///
    /// Samples are walked newest first until their accumulated `dt` exceeds
    /// the window. The oldest retained sample only anchors the walk and is
    /// never averaged. Samples with a non-positive `dt` are skipped. Returns
    /// [`Vec2::ZERO`] if nothing qualifies.
    #[must_use]
    pub fn mean_velocity(&self, window_ms: f64) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0_u32;
        let mut elapsed = 0.0;
        for sample in self.samples.iter().skip(1).rev() {
            elapsed += sample.dt;
            if sample.dt > 0.0 {
                sum += sample.delta / sample.dt;
                count += 1;
            }
            if elapsed > window_ms {
                break;
            }
        }
        if count == 0 {
            Vec2::ZERO
        } else {
            sum / f64::from(count)
        }
    }

    /// Seeds the throw velocity at release time `now`.
    ///
    /// A zero-displacement sample is appended first, so a pause before the
    /// release slows the throw down. The averaged velocity then goes through
    /// one [`ThrowBody::next_velocity`] step right away, which lets
    /// containment act on the very first frame.
    ///
    /// Returns [`ThrowStatus::Running`] if the host should start ticking, or
    /// [`ThrowStatus::Idle`] when [`ThrowConfig::auto_throw`] is off, in which
    /// case the velocity is seeded but ticking is left to the caller.
    pub fn start_throw(&mut self, now: f64, body: &mut impl ThrowBody) -> ThrowStatus {
        self.add_velocity(Vec2::ZERO, now);
        let mean = self.mean_velocity(self.config.window_ms);
        let velocity = body.next_velocity(mean, self.config.throw_damping);
        debug!("throw started at {velocity:?} px/ms");
        self.velocity = Some(velocity);
        if self.config.auto_throw {
            ThrowStatus::Running
        } else {
            ThrowStatus::Idle
        }
    }

    /// Advances a throw to frame time `now`.
    ///
    /// The body moves by `velocity * dt` and is told via
    /// [`ThrowBody::on_drag_update`]. The throw keeps running while the speed
    /// is above [`REST_SPEED`] or the body reports itself outside; otherwise
    /// it stops and [`ThrowBody::on_drag_complete`] fires.
    ///
    /// The damping step never speeds the object up: a faster result is scaled
    /// back to the previous speed.
    pub fn tick(&mut self, now: f64, body: &mut impl ThrowBody) -> ThrowStatus {
        let Some(velocity) = self.velocity else {
            return ThrowStatus::Idle;
        };
        let dt = now - self.last_frame.unwrap_or(now);
        self.last_frame = Some(now);

        let mut next = body.next_velocity(velocity, self.config.throw_damping);
        let previous_speed = velocity.hypot();
        let next_speed = next.hypot();
        if next_speed > previous_speed {
            warn!("throw velocity grew from {previous_speed} to {next_speed}, clamping");
            next = if previous_speed > 0.0 {
                next * (previous_speed / next_speed)
            } else {
                Vec2::ZERO
            };
        }
        self.velocity = Some(next);

        let delta = next * dt;
        body.move_by(delta);
        body.on_drag_update(delta);

        if dt == 0.0 || next.hypot() > REST_SPEED || body.is_outside() {
            return ThrowStatus::Running;
        }
        debug!("throw came to rest");
        self.velocity = None;
        body.on_drag_complete();
        ThrowStatus::Completed
    }

    /// Cancels any throw in progress and forgets the samples.
    pub fn kill_animation(&mut self) {
        self.velocity = None;
        self.samples.clear();
    }

    /// Returns `true` while a throw velocity is set.
    #[must_use]
    pub fn is_throwing(&self) -> bool {
        self.velocity.is_some()
    }

    /// Current throw velocity.
    #[must_use]
    pub fn velocity(&self) -> Option<Vec2> {
        self.velocity
    }
}

impl Default for Throwable {
    fn default() -> Self {
        Self::new(ThrowConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Free {
        moved: Vec2,
        completed: usize,
    }

    impl ThrowBody for Free {
        fn move_by(&mut self, delta: Vec2) {
            self.moved += delta;
        }

        fn on_drag_complete(&mut self) {
            self.completed += 1;
        }
    }

    fn dragged(dx: f64) -> Throwable {
        let mut t = Throwable::default();
        t.observe_velocity(0.0);
        for i in 1..=4 {
            t.add_velocity(Vec2::new(dx, 0.0), f64::from(i) * 10.0);
        }
        t
    }

    #[test]
    fn buffer_keeps_latest_samples() {
        let mut t = Throwable::default();
        t.observe_velocity(0.0);
        for i in 1..=8 {
            t.add_velocity(Vec2::new(f64::from(i), 0.0), f64::from(i));
        }
        let xs: Vec<f64> = t.samples().map(|s| s.delta.x).collect();
        assert_eq!(xs, [4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn mean_velocity_respects_window() {
        let mut t = Throwable::default();
        t.observe_velocity(0.0);
        t.add_velocity(Vec2::new(100.0, 0.0), 10.0);
        t.add_velocity(Vec2::new(100.0, 0.0), 20.0);
        t.add_velocity(Vec2::new(10.0, 0.0), 30.0);
        t.add_velocity(Vec2::new(10.0, 0.0), 40.0);
        t.add_velocity(Vec2::new(10.0, 0.0), 50.0);
        // Newest first: 1, 1, 1 (elapsed 30, not yet past the window), then
        // 10 (elapsed 40) and stop.
        let v = t.mean_velocity(30.0);
        assert!((v.x - 13.0 / 4.0).abs() < 1e-12);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn empty_window_is_zero() {
        let t = Throwable::default();
        assert_eq!(t.mean_velocity(30.0), Vec2::ZERO);
        let mut t = Throwable::default();
        t.observe_velocity(5.0);
        t.add_velocity(Vec2::new(3.0, 3.0), 5.0);
        t.add_velocity(Vec2::new(3.0, 3.0), 5.0);
        assert_eq!(t.mean_velocity(30.0), Vec2::ZERO);
    }

    #[test]
    fn release_pause_slows_the_throw() {
        let mut quick = dragged(10.0);
        let mut paused = dragged(10.0);
        let mut body = Free::default();
        quick.start_throw(40.0, &mut body);
        paused.start_throw(60.0, &mut body);
        let quick_speed = quick.velocity().unwrap().x;
        let paused_speed = paused.velocity().unwrap().x;
        assert!((quick_speed - 0.95).abs() < 1e-12);
        assert!(paused_speed < quick_speed);
    }

    #[test]
    fn throw_moves_then_completes() {
        let mut t = dragged(10.0);
        let mut body = Free::default();
        assert_eq!(t.start_throw(40.0, &mut body), ThrowStatus::Running);
        let mut now = 40.0;
        let mut status = ThrowStatus::Running;
        while status == ThrowStatus::Running {
            now += 16.0;
            status = t.tick(now, &mut body);
        }
        assert_eq!(status, ThrowStatus::Completed);
        assert_eq!(body.completed, 1);
        assert!(body.moved.x > 0.0);
        assert_eq!(body.moved.y, 0.0);
        assert!(!t.is_throwing());
        assert_eq!(t.tick(now + 16.0, &mut body), ThrowStatus::Idle);
    }

    #[test]
    fn manual_throw_is_seeded_but_idle() {
        let mut t = Throwable::new(ThrowConfig::default().with_auto_throw(false));
        t.observe_velocity(0.0);
        t.add_velocity(Vec2::new(0.0, 5.0), 10.0);
        t.add_velocity(Vec2::new(0.0, 5.0), 20.0);
        let mut body = Free::default();
        assert_eq!(t.start_throw(20.0, &mut body), ThrowStatus::Idle);
        assert!(t.is_throwing());
    }

    #[test]
    fn kill_stops_a_throw() {
        let mut t = dragged(10.0);
        let mut body = Free::default();
        t.start_throw(40.0, &mut body);
        t.kill_animation();
        assert_eq!(t.tick(56.0, &mut body), ThrowStatus::Idle);
        assert_eq!(t.samples().count(), 0);
        assert_eq!(body.completed, 0);
    }
}

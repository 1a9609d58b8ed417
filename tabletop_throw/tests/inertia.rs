// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throw loops decay, never accelerate, and respect bodies that are still
//! outside their area.

use kurbo::{Point, Vec2};
use tabletop_throw::{REST_SPEED, ThrowBody, ThrowConfig, ThrowStatus, Throwable};

const FRAME: f64 = 16.0;

struct Puck {
    at: Point,
    updates: usize,
    completed: bool,
}

impl Puck {
    fn new() -> Self {
        Self {
            at: Point::ORIGIN,
            updates: 0,
            completed: false,
        }
    }
}

impl ThrowBody for Puck {
    fn move_by(&mut self, delta: Vec2) {
        self.at += delta;
    }

    fn on_drag_update(&mut self, _: Vec2) {
        self.updates += 1;
    }

    fn on_drag_complete(&mut self) {
        self.completed = true;
    }
}

/// Tries to speed up every frame.
struct Rocket(Puck);

impl ThrowBody for Rocket {
    fn move_by(&mut self, delta: Vec2) {
        self.0.move_by(delta);
    }

    fn next_velocity(&mut self, velocity: Vec2, _: f64) -> Vec2 {
        velocity * 1.5 + Vec2::new(0.1, 0.0)
    }
}

/// Reports itself outside until it has travelled left of x = 0.
struct Parked {
    x: f64,
}

impl ThrowBody for Parked {
    fn move_by(&mut self, delta: Vec2) {
        self.x += delta.x;
    }

    fn next_velocity(&mut self, velocity: Vec2, damping: f64) -> Vec2 {
        if self.x > 0.0 {
            Vec2::new(-0.005, 0.0)
        } else {
            velocity * damping
        }
    }

    fn is_outside(&self) -> bool {
        self.x > 0.0
    }
}

fn release(throwable: &mut Throwable, velocity: Vec2, body: &mut impl ThrowBody) -> f64 {
    throwable.observe_velocity(0.0);
    for frame in 1..=4 {
        throwable.add_velocity(velocity * FRAME, f64::from(frame) * FRAME);
    }
    let now = 4.0 * FRAME;
    throwable.start_throw(now, body);
    now
}

#[test]
fn any_damping_below_one_terminates() {
    for damping in [0.5, 0.9, 0.95, 0.99] {
        for speed in [0.02, 1.0, 40.0] {
            let mut throwable = Throwable::new(ThrowConfig::default().with_damping(damping));
            let mut puck = Puck::new();
            let mut now = release(&mut throwable, Vec2::new(speed, -speed), &mut puck);
            let mut last = throwable.velocity().unwrap().hypot();
            let mut frames = 0;
            loop {
                now += FRAME;
                let status = throwable.tick(now, &mut puck);
                frames += 1;
                if status == ThrowStatus::Completed {
                    break;
                }
                let current = throwable.velocity().unwrap().hypot();
                assert!(current <= last, "speed grew from {last} to {current}");
                last = current;
                assert!(frames < 10_000, "throw did not settle");
            }
            assert!(puck.completed);
            assert_eq!(puck.updates, frames);
        }
    }
}

#[test]
fn acceleration_is_clamped_to_previous_speed() {
    let mut throwable = Throwable::default();
    let mut rocket = Rocket(Puck::new());
    let mut now = release(&mut throwable, Vec2::new(0.0, 1.0), &mut rocket);
    let seeded = throwable.velocity().unwrap().hypot();
    for _ in 0..50 {
        now += FRAME;
        assert_eq!(throwable.tick(now, &mut rocket), ThrowStatus::Running);
        let speed = throwable.velocity().unwrap().hypot();
        assert!(speed <= seeded + 1e-9, "speed {speed} exceeds {seeded}");
    }
}

#[test]
fn outside_body_keeps_the_loop_alive_below_rest_speed() {
    let mut throwable = Throwable::default();
    let mut body = Parked { x: 1.0 };
    let mut now = release(&mut throwable, Vec2::new(0.001, 0.0), &mut body);
    now += FRAME;
    // Speed is already below the rest threshold, but the body is outside.
    assert!(throwable.velocity().unwrap().hypot() < REST_SPEED);
    assert_eq!(throwable.tick(now, &mut body), ThrowStatus::Running);
    let mut frames = 1;
    while throwable.tick(now + FRAME, &mut body) == ThrowStatus::Running {
        now += FRAME;
        frames += 1;
        assert!(frames < 100, "throw did not settle");
    }
    assert!(body.x <= 0.0);
}

#[test]
fn frozen_clock_keeps_running() {
    let mut throwable = Throwable::default();
    let mut puck = Puck::new();
    let now = release(&mut throwable, Vec2::new(0.001, 0.0), &mut puck);
    // No time passed since the release sample: nothing moves, nothing ends.
    assert_eq!(throwable.tick(now, &mut puck), ThrowStatus::Running);
    assert_eq!(puck.at, Point::ORIGIN);
}

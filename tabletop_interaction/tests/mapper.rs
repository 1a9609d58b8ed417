// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end routing of simultaneous contacts to independent targets.

use kurbo::{Point, Rect, Vec2};
use tabletop_interaction::{
    DelegateOptions, InputApi, InputEvent, InteractionMapper, InteractionPoints,
    InteractionTarget, MapperTarget, Phase, PointerInput, PointerKey, PointerType,
    TargetCapabilities, Touch, TouchInput, WheelInput,
};

#[derive(Debug, Default)]
struct Tile {
    bounds: Rect,
    offset: Vec2,
    starts: usize,
    ends: usize,
    last_ended: Option<Point>,
    wheel: usize,
    taps: usize,
}

impl InteractionTarget for Tile {
    fn on_start(&mut self, _: &InputEvent, _: &InteractionPoints) {
        self.starts += 1;
    }

    fn on_move(&mut self, _: &InputEvent, points: &InteractionPoints) {
        if let Some(delta) = points.delta() {
            self.offset += delta.translate;
        }
    }

    fn on_end(&mut self, event: &InputEvent, points: &InteractionPoints) {
        self.ends += 1;
        self.last_ended = points.ended().iter().map(|(_, p)| p).next();
        if points.is_any_tap(event.time()) {
            self.taps += 1;
        }
    }

    fn on_mouse_wheel(&mut self, _: &WheelInput) {
        self.wheel += 1;
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::INTERACTION_TARGET | TargetCapabilities::WHEEL
    }
}

/// Two tiles on a surface whose origin sits at (10, 10) on the page.
#[derive(Debug)]
struct Surface {
    origin: Vec2,
    tiles: Vec<Tile>,
    own_wheel: usize,
}

impl Surface {
    fn new() -> Self {
        Self {
            origin: Vec2::new(10.0, 10.0),
            tiles: vec![
                Tile {
                    bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
                    ..Tile::default()
                },
                Tile {
                    bounds: Rect::new(200.0, 0.0, 300.0, 100.0),
                    ..Tile::default()
                },
            ],
            own_wheel: 0,
        }
    }
}

impl MapperTarget for Surface {
    type Id = usize;

    fn find_target(&mut self, _: &InputEvent, local: Point, _: Point) -> Option<usize> {
        self.tiles.iter().position(|t| t.bounds.contains(local))
    }

    fn map_position_to_point(&self, point: Point) -> Point {
        point - self.origin
    }

    fn target_mut(&mut self, id: usize) -> Option<&mut dyn InteractionTarget> {
        self.tiles
            .get_mut(id)
            .map(|t| t as &mut dyn InteractionTarget)
    }

    fn on_mouse_wheel(&mut self, _: &WheelInput) {
        self.own_wheel += 1;
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::MAPPER_TARGET
            | TargetCapabilities::MAP_POSITION
            | TargetCapabilities::WHEEL
    }
}

fn touch(phase: Phase, changed: &[(i64, f64, f64)], t: f64) -> InputEvent {
    let touches = changed
        .iter()
        .map(|&(id, x, y)| Touch::new(id, Point::new(x, y)))
        .collect();
    InputEvent::Touch(phase, TouchInput::new(touches, t))
}

fn mapper() -> InteractionMapper<Surface> {
    InteractionMapper::new(
        Surface::new(),
        DelegateOptions::default().with_api(InputApi::Touch),
    )
    .unwrap()
}

#[test]
fn two_fingers_drive_two_tiles_independently() {
    let mut m = mapper();

    m.handle(&touch(Phase::Down, &[(1, 60.0, 60.0)], 0.0));
    m.handle(&touch(Phase::Down, &[(2, 260.0, 60.0)], 5.0));
    assert_eq!(m.interaction().target_count(), 2);
    assert_eq!(m.interaction().target_of(PointerKey::Id(1)), Some(0));
    assert_eq!(m.interaction().target_of(PointerKey::Id(2)), Some(1));

    m.handle(&touch(Phase::Move, &[(1, 70.0, 60.0), (2, 250.0, 60.0)], 16.0));
    m.handle(&touch(Phase::Move, &[(1, 75.0, 65.0), (2, 250.0, 60.0)], 32.0));

    let tiles = &m.target().tiles;
    assert_eq!(tiles[0].offset, Vec2::new(15.0, 5.0));
    assert_eq!(tiles[1].offset, Vec2::new(-10.0, 0.0));
    assert_eq!((tiles[0].starts, tiles[1].starts), (1, 1));

    // Sub-interactions hold surface-local positions.
    let sub = m.interaction().sub_interaction(0).unwrap();
    assert_eq!(sub.current().get(PointerKey::Id(1)), Some(Point::new(65.0, 55.0)));
    assert!(!sub.current().contains(PointerKey::Id(2)));

    m.handle(&touch(Phase::Up, &[(1, 75.0, 65.0)], 48.0));
    let tiles = &m.target().tiles;
    assert_eq!(tiles[0].ends, 1);
    assert_eq!(tiles[0].last_ended, Some(Point::new(65.0, 55.0)));
    assert_eq!(tiles[1].ends, 0);
    assert_eq!(m.interaction().target_count(), 1);
    assert_eq!(m.interaction().target_of(PointerKey::Id(1)), None);
}

#[test]
fn contacts_outside_every_tile_are_tracked_but_not_routed() {
    let mut m = mapper();
    m.handle(&touch(Phase::Down, &[(7, 160.0, 60.0)], 0.0));
    assert!(m.interaction().points().current().contains(PointerKey::Id(7)));
    assert_eq!(m.interaction().target_count(), 0);
    m.handle(&touch(Phase::Up, &[(7, 160.0, 60.0)], 40.0));
    assert!(m.interaction().points().is_finished());
    assert!(m.target().tiles.iter().all(|t| t.starts == 0 && t.ends == 0));
}

#[test]
fn taps_are_classified_per_tile() {
    let mut m = mapper();
    m.handle(&touch(Phase::Down, &[(1, 20.0, 20.0)], 0.0));
    m.handle(&touch(Phase::Up, &[(1, 22.0, 21.0)], 120.0));
    m.handle(&touch(Phase::Down, &[(2, 220.0, 20.0)], 200.0));
    m.handle(&touch(Phase::Up, &[(2, 220.0, 20.0)], 900.0));
    let tiles = &m.target().tiles;
    assert_eq!(tiles[0].taps, 1);
    // Held past the long-press threshold.
    assert_eq!(tiles[1].taps, 0);
}

#[test]
fn wheel_prefers_the_tile_under_the_cursor() {
    let mut m = mapper();
    let over_tile = WheelInput::new(Point::new(50.0, 50.0), Vec2::new(0.0, -1.0), 0.0);
    let over_gap = WheelInput::new(Point::new(160.0, 50.0), Vec2::new(0.0, -1.0), 1.0);
    assert!(m.handle(&InputEvent::Wheel(over_tile)).captured);
    m.handle(&InputEvent::Wheel(over_gap));
    assert_eq!(m.target().tiles[0].wheel, 1);
    assert_eq!(m.target().own_wheel, 1);
}

#[test]
fn pointer_events_are_ignored_under_touch_binding() {
    let mut m = mapper();
    let down = InputEvent::Pointer(
        Phase::Down,
        PointerInput::new(1, PointerType::Touch, Point::new(60.0, 60.0), 0.0),
    );
    let response = m.handle(&down);
    assert!(!response.captured);
    assert_eq!(m.interaction().target_count(), 0);
}

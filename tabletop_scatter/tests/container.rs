// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One mapper drives every scatter on a stage.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};
use tabletop_interaction::{
    DelegateOptions, InputApi, InputEvent, InteractionMapper, Phase, Touch, TouchInput,
    WheelInput,
};
use tabletop_scatter::{EventType, ScatterConfig, ScatterContainer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Card {
    Left,
    Right,
}

/// A stage at (100, 50) on the page with two cards that do not overlap.
fn mapper() -> InteractionMapper<ScatterContainer<Card>> {
    let mut stage = ScatterContainer::new(Rect::new(100.0, 50.0, 900.0, 650.0));
    let left = ScatterConfig::new(Point::new(50.0, 50.0), Size::new(200.0, 200.0))
        .with_scale_range(0.5, 3.0)
        .build()
        .unwrap();
    let right = ScatterConfig::new(Point::new(400.0, 50.0), Size::new(200.0, 200.0))
        .with_scale_range(0.5, 3.0)
        .build()
        .unwrap();
    stage.insert(Card::Left, left);
    stage.insert(Card::Right, right);
    InteractionMapper::new(stage, DelegateOptions::default().with_api(InputApi::Touch)).unwrap()
}

fn touch(phase: Phase, changed: &[(i64, f64, f64)], t: f64) -> InputEvent {
    let touches = changed
        .iter()
        .map(|&(id, x, y)| Touch::new(id, Point::new(x, y)))
        .collect();
    InputEvent::Touch(phase, TouchInput::new(touches, t))
}

#[test]
fn pinch_zooms_about_the_fingers() {
    let mut m = mapper();
    // Both fingers on the left card, 100 px apart around its center
    // (150, 150) in stage coordinates.
    m.handle(&touch(Phase::Down, &[(1, 200.0, 200.0), (2, 300.0, 200.0)], 0.0));
    m.handle(&touch(Phase::Move, &[(1, 150.0, 200.0), (2, 350.0, 200.0)], 16.0));

    let card = m.target().get(Card::Left).unwrap();
    assert!((card.scale() - 2.0).abs() < 1e-9);
    assert!((card.center() - Point::new(150.0, 150.0)).hypot() < 1e-9);
    assert!(card.is_dragging());
    assert_eq!(card.interaction_anchor(), Some(Point::new(150.0, 150.0)));

    let right = m.target().get(Card::Right).unwrap();
    assert_eq!(right.scale(), 1.0);
}

#[test]
fn two_cards_are_dragged_at_once() {
    let mut m = mapper();
    m.handle(&touch(Phase::Down, &[(1, 200.0, 150.0)], 0.0));
    m.handle(&touch(Phase::Down, &[(2, 600.0, 150.0)], 2.0));
    m.handle(&touch(Phase::Move, &[(1, 220.0, 160.0), (2, 590.0, 150.0)], 16.0));

    let stage = m.target();
    assert_eq!(
        stage.get(Card::Left).unwrap().position(),
        Point::new(70.0, 60.0)
    );
    assert_eq!(
        stage.get(Card::Right).unwrap().position(),
        Point::new(390.0, 50.0)
    );
}

#[test]
fn touching_a_card_brings_it_to_front() {
    let mut m = mapper();
    assert_eq!(m.target().ids(), [Card::Left, Card::Right]);
    m.handle(&touch(Phase::Down, &[(1, 200.0, 150.0)], 0.0));
    assert_eq!(m.target().ids(), [Card::Right, Card::Left]);
    assert_eq!(m.target().claimed(), Some(Card::Left));
}

#[test]
fn taps_reach_the_tap_handler_in_card_coordinates() {
    let mut m = mapper();
    let taps = Rc::new(RefCell::new(Vec::new()));
    let sink = taps.clone();
    m.target_mut()
        .get_mut(Card::Right)
        .unwrap()
        .set_tap_handler(move |p| sink.borrow_mut().push(p));
    let ends = Rc::new(RefCell::new(0));
    let sink = ends.clone();
    m.target_mut()
        .get_mut(Card::Right)
        .unwrap()
        .add_transform_listener(move |e| {
            if e.kind == Some(EventType::End) {
                *sink.borrow_mut() += 1;
            }
        });

    m.handle(&touch(Phase::Down, &[(5, 600.0, 150.0)], 0.0));
    m.handle(&touch(Phase::Up, &[(5, 601.0, 151.0)], 80.0));
    assert_eq!(*taps.borrow(), [Point::new(501.0, 101.0)]);
    assert_eq!(*ends.borrow(), 1);
    assert!(!m.target().get(Card::Right).unwrap().is_dragging());
}

#[test]
fn wheel_over_a_card_zooms_that_card() {
    let mut m = mapper();
    let wheel = WheelInput::new(Point::new(600.0, 200.0), Vec2::new(0.0, -1.0), 0.0);
    assert!(m.handle(&InputEvent::Wheel(wheel)).captured);
    let stage = m.target();
    assert!((stage.get(Card::Right).unwrap().scale() - 1.1).abs() < 1e-12);
    assert_eq!(stage.get(Card::Left).unwrap().scale(), 1.0);
}

#[test]
fn released_cards_settle_with_the_stage_tick() {
    let mut m = mapper();
    m.handle(&touch(Phase::Down, &[(1, 200.0, 150.0)], 0.0));
    for frame in 1..=4 {
        let x = 200.0 + 20.0 * f64::from(frame);
        m.handle(&touch(Phase::Move, &[(1, x, 150.0)], 16.0 * f64::from(frame)));
    }
    m.handle(&touch(Phase::Up, &[(1, 280.0, 150.0)], 80.0));
    let released = m.target().get(Card::Left).unwrap().position();
    assert_eq!(released, Point::new(130.0, 50.0));
    assert!(m.target().get(Card::Left).unwrap().is_throwing());

    let stage = m.target_mut();
    let mut now = 80.0;
    let mut frames = 0;
    while stage.tick(now) {
        now += 16.0;
        frames += 1;
        assert!(frames < 1_000, "stage never came to rest");
    }
    let card = stage.get(Card::Left).unwrap();
    assert!(card.position().x > released.x);
    assert_eq!(card.position().y, 50.0);
}

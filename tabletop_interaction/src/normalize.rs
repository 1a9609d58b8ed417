// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event normalization: raw input to a [`PointMap`].
//!
//! ```
//! use kurbo::Point;
//! use tabletop_interaction::{
//!     Buttons, InputEvent, MouseInput, Phase, PointerKey, extract_points,
//! };
//!
//! let drag = InputEvent::Mouse(Phase::Move, MouseInput::new(Point::new(4.0, 2.0), 16.0));
//! assert_eq!(extract_points(&drag).get(PointerKey::Mouse), Some(Point::new(4.0, 2.0)));
//!
//! // Hovering without a button is not a contact.
//! let hover = InputEvent::Mouse(
//!     Phase::Move,
//!     MouseInput::new(Point::new(4.0, 2.0), 16.0).with_buttons(Buttons::empty()),
//! );
//! assert!(extract_points(&hover).is_empty());
//! ```

use crate::event::{InputEvent, Phase, PointerType, Touch, TouchType};
use crate::{PointMap, PointerKey};

/// Extracts the contacts carried by `event`.
///
/// - Pointer events yield their pointer id. A mouse-type pointer moving
///   without any button held yields nothing.
/// - Touch events yield their changed touches, and on move also every touch
///   still on the surface. Stylus touches use [`PointerKey::Stylus`].
/// - Mouse events yield [`PointerKey::Mouse`] on press, release and cancel,
///   and on move or leave only while a button is held.
/// - Wheel events yield nothing.
#[must_use]
pub fn extract_points(event: &InputEvent) -> PointMap {
    let mut points = PointMap::new();
    match event {
        InputEvent::Pointer(phase, pointer) => {
            let hovering = pointer.pointer_type == PointerType::Mouse
                && pointer.buttons.is_empty()
                && *phase == Phase::Move;
            if !hovering {
                points.insert(PointerKey::Id(pointer.pointer_id), pointer.position);
            }
        }
        InputEvent::Touch(phase, touches) => {
            for touch in &touches.changed {
                points.insert(touch_key(touch), touch.position);
            }
            if *phase == Phase::Move {
                for touch in &touches.targets {
                    points.insert(touch_key(touch), touch.position);
                }
            }
        }
        InputEvent::Mouse(phase, mouse) => {
            let pressed = match phase {
                Phase::Down | Phase::Up | Phase::Cancel => true,
                Phase::Move | Phase::Leave => !mouse.buttons.is_empty(),
            };
            if pressed {
                points.insert(PointerKey::Mouse, mouse.position);
            }
        }
        InputEvent::Wheel(_) => {}
    }
    points
}

/// Key used for a touch contact.
#[must_use]
pub fn touch_key(touch: &Touch) -> PointerKey {
    match touch.touch_type {
        TouchType::Stylus => PointerKey::Stylus,
        TouchType::Direct => PointerKey::Id(touch.identifier),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Vec2};

    use super::*;
    use crate::event::{Buttons, MouseInput, PointerInput, TouchInput, WheelInput};

    #[test]
    fn pointer_yields_its_id() {
        let e = InputEvent::Pointer(
            Phase::Down,
            PointerInput::new(9, PointerType::Touch, Point::new(1.0, 2.0), 0.0),
        );
        let points = extract_points(&e);
        assert_eq!(points.get(PointerKey::Id(9)), Some(Point::new(1.0, 2.0)));
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn hovering_mouse_pointer_is_suppressed() {
        let p = PointerInput::new(1, PointerType::Mouse, Point::ORIGIN, 0.0)
            .with_buttons(Buttons::empty());
        assert!(extract_points(&InputEvent::Pointer(Phase::Move, p)).is_empty());
        // Release reports the position even though no button is held anymore.
        assert_eq!(extract_points(&InputEvent::Pointer(Phase::Up, p)).len(), 1);
    }

    #[test]
    fn stylus_touch_uses_stylus_key() {
        let e = InputEvent::Touch(
            Phase::Down,
            TouchInput::new(vec![Touch::stylus(4, Point::new(3.0, 3.0))], 0.0),
        );
        assert_eq!(
            extract_points(&e).get(PointerKey::Stylus),
            Some(Point::new(3.0, 3.0))
        );
    }

    #[test]
    fn touch_move_includes_target_touches() {
        let touches = TouchInput {
            changed: vec![Touch::new(1, Point::new(1.0, 0.0))],
            targets: vec![
                Touch::new(1, Point::new(1.0, 0.0)),
                Touch::new(2, Point::new(50.0, 0.0)),
            ],
            time: 0.0,
        };
        let moved = extract_points(&InputEvent::Touch(Phase::Move, touches.clone()));
        assert_eq!(moved.len(), 2);
        let ended = extract_points(&InputEvent::Touch(Phase::Up, touches));
        assert_eq!(ended.len(), 1);
        assert!(ended.contains(PointerKey::Id(1)));
    }

    #[test]
    fn mouse_release_without_buttons_still_ends_contact() {
        let up = MouseInput::new(Point::new(5.0, 5.0), 10.0).with_buttons(Buttons::empty());
        let points = extract_points(&InputEvent::Mouse(Phase::Up, up));
        assert_eq!(points.get(PointerKey::Mouse), Some(Point::new(5.0, 5.0)));
        assert!(extract_points(&InputEvent::Mouse(Phase::Leave, up)).is_empty());
    }

    #[test]
    fn wheel_is_not_a_contact() {
        let w = WheelInput::new(Point::ORIGIN, Vec2::new(0.0, -1.0), 0.0);
        assert!(extract_points(&InputEvent::Wheel(w)).is_empty());
    }
}

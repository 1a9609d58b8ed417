// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input model.
//!
//! Hosts translate their platform events into [`InputEvent`] values. Three
//! mutually exclusive families exist (pointer, touch and mouse), plus wheel
//! events which are delivered regardless of the bound family. Positions are in
//! page (global) coordinates and timestamps are milliseconds on a monotonic
//! clock chosen by the host.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Currently held mouse buttons, using the DOM `buttons` bit layout.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Buttons: u8 {
        /// Primary (usually left) button.
        const PRIMARY = 1;
        /// Secondary (usually right) button.
        const SECONDARY = 1 << 1;
        /// Auxiliary (usually middle) button.
        const AUXILIARY = 1 << 2;
        /// Browser back button.
        const BACK = 1 << 3;
        /// Browser forward button.
        const FORWARD = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held while the event was raised.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

/// Stage of a contact within its event family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// `pointerdown`, `touchstart`, `mousedown`.
    Down,
    /// `pointermove`, `touchmove`, `mousemove`.
    Move,
    /// `pointerup`, `touchend`, `mouseup`.
    Up,
    /// `pointercancel`, `touchcancel`.
    Cancel,
    /// `pointerleave`, `mouseout`.
    ///
    /// Hosts forward this only when it was raised on the bound surface itself,
    /// not when bubbling out of a child.
    Leave,
}

/// Device behind a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerType {
    /// Mouse.
    Mouse,
    /// Finger on a touch surface.
    Touch,
    /// Pen or stylus.
    Pen,
}

/// One pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    /// Platform pointer id.
    pub pointer_id: i64,
    /// Device kind.
    pub pointer_type: PointerType,
    /// Page position.
    pub position: Point,
    /// Buttons held after this event.
    pub buttons: Buttons,
    /// Timestamp in milliseconds.
    pub time: f64,
}

impl PointerInput {
    /// Creates a pointer input with the primary button held.
    #[must_use]
    pub fn new(pointer_id: i64, pointer_type: PointerType, position: Point, time: f64) -> Self {
        Self {
            pointer_id,
            pointer_type,
            position,
            buttons: Buttons::PRIMARY,
            time,
        }
    }

    /// Replaces the held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Kind of touch reported by the touch API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchType {
    /// A finger.
    #[default]
    Direct,
    /// A stylus.
    Stylus,
}

/// A single touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Touch {
    /// Touch identifier, stable for the lifetime of the contact.
    pub identifier: i64,
    /// Finger or stylus.
    pub touch_type: TouchType,
    /// Page position.
    pub position: Point,
}

impl Touch {
    /// Creates a finger touch.
    #[must_use]
    pub fn new(identifier: i64, position: Point) -> Self {
        Self {
            identifier,
            touch_type: TouchType::Direct,
            position,
        }
    }

    /// Creates a stylus touch.
    #[must_use]
    pub fn stylus(identifier: i64, position: Point) -> Self {
        Self {
            identifier,
            touch_type: TouchType::Stylus,
            position,
        }
    }
}

/// One touch event.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchInput {
    /// Touches whose state changed with this event.
    pub changed: Vec<Touch>,
    /// All touches currently on the bound surface.
    pub targets: Vec<Touch>,
    /// Timestamp in milliseconds.
    pub time: f64,
}

impl TouchInput {
    /// Touch event whose changed and target lists are both `touches`.
    #[must_use]
    pub fn new(touches: Vec<Touch>, time: f64) -> Self {
        Self {
            targets: touches.clone(),
            changed: touches,
            time,
        }
    }
}

/// One mouse event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MouseInput {
    /// Page position.
    pub position: Point,
    /// Buttons held after this event.
    pub buttons: Buttons,
    /// Held keyboard modifiers.
    pub modifiers: Modifiers,
    /// Timestamp in milliseconds.
    pub time: f64,
}

impl MouseInput {
    /// Creates a mouse input with the primary button held.
    #[must_use]
    pub fn new(position: Point, time: f64) -> Self {
        Self {
            position,
            buttons: Buttons::PRIMARY,
            modifiers: Modifiers::empty(),
            time,
        }
    }

    /// Replaces the held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    /// Page position of the cursor.
    pub position: Point,
    /// Scroll delta; negative `y` scrolls up.
    pub delta: Vec2,
    /// Held keyboard modifiers.
    pub modifiers: Modifiers,
    /// Timestamp in milliseconds.
    pub time: f64,
}

impl WheelInput {
    /// Creates a wheel input without modifiers.
    #[must_use]
    pub fn new(position: Point, delta: Vec2, time: f64) -> Self {
        Self {
            position,
            delta,
            modifiers: Modifiers::empty(),
            time,
        }
    }

    /// Replaces the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` when the wheel moved up (away from the user).
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.delta.y < 0.0
    }
}

/// Event family a delegate can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputFamily {
    /// Pointer events.
    Pointer,
    /// Touch events.
    Touch,
    /// Mouse events.
    Mouse,
    /// Wheel events, accepted by every binding.
    Wheel,
}

/// A raw input event as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Pointer API event.
    Pointer(Phase, PointerInput),
    /// Touch API event.
    Touch(Phase, TouchInput),
    /// Mouse API event.
    Mouse(Phase, MouseInput),
    /// Wheel event.
    Wheel(WheelInput),
}

impl InputEvent {
    /// Timestamp in milliseconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Self::Pointer(_, p) => p.time,
            Self::Touch(_, t) => t.time,
            Self::Mouse(_, m) => m.time,
            Self::Wheel(w) => w.time,
        }
    }

    /// Phase of the event, `None` for wheel events.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Pointer(phase, _) | Self::Touch(phase, _) | Self::Mouse(phase, _) => {
                Some(*phase)
            }
            Self::Wheel(_) => None,
        }
    }

    /// Family the event belongs to.
    #[must_use]
    pub fn family(&self) -> InputFamily {
        match self {
            Self::Pointer(..) => InputFamily::Pointer,
            Self::Touch(..) => InputFamily::Touch,
            Self::Mouse(..) => InputFamily::Mouse,
            Self::Wheel(_) => InputFamily::Wheel,
        }
    }

    /// Held keyboard modifiers, empty when the family does not report them.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Mouse(_, m) => m.modifiers,
            Self::Wheel(w) => w.modifiers,
            Self::Pointer(..) | Self::Touch(..) => Modifiers::empty(),
        }
    }
}

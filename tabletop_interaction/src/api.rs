// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::event::InputFamily;

/// What the platform can deliver. Implemented by the host.
pub trait PlatformCapabilities {
    /// Pointer events are available.
    fn supports_pointer_events(&self) -> bool;
    /// Touch events are available.
    fn supports_touch_events(&self) -> bool;
}

/// Fixed capability answers, for tests and for hosts that know their platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticCapabilities {
    /// Pointer events are available.
    pub pointer_events: bool,
    /// Touch events are available.
    pub touch_events: bool,
}

impl PlatformCapabilities for StaticCapabilities {
    fn supports_pointer_events(&self) -> bool {
        self.pointer_events
    }

    fn supports_touch_events(&self) -> bool {
        self.touch_events
    }
}

/// The one event family a delegate listens to.
///
/// Families are never combined: a platform delivering pointer events usually
/// also synthesizes mouse events for the same contact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputApi {
    /// Pointer events.
    #[default]
    Pointer,
    /// Touch events.
    Touch,
    /// Mouse events.
    Mouse,
}

impl InputApi {
    /// Picks the best available family: pointer, then touch, then mouse.
    #[must_use]
    pub fn select(caps: &dyn PlatformCapabilities) -> Self {
        if caps.supports_pointer_events() {
            Self::Pointer
        } else if caps.supports_touch_events() {
            Self::Touch
        } else {
            Self::Mouse
        }
    }

    /// Returns `true` if events of `family` are handled under this binding.
    ///
    /// Wheel events are accepted by every binding.
    #[must_use]
    pub fn accepts(self, family: InputFamily) -> bool {
        matches!(
            (self, family),
            (_, InputFamily::Wheel)
                | (Self::Pointer, InputFamily::Pointer)
                | (Self::Touch, InputFamily::Touch)
                | (Self::Mouse, InputFamily::Mouse)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_pointer_touch_mouse() {
        let both = StaticCapabilities {
            pointer_events: true,
            touch_events: true,
        };
        assert_eq!(InputApi::select(&both), InputApi::Pointer);
        let touch = StaticCapabilities {
            pointer_events: false,
            touch_events: true,
        };
        assert_eq!(InputApi::select(&touch), InputApi::Touch);
        assert_eq!(
            InputApi::select(&StaticCapabilities::default()),
            InputApi::Mouse
        );
    }

    #[test]
    fn families_are_exclusive() {
        assert!(InputApi::Touch.accepts(InputFamily::Touch));
        assert!(!InputApi::Touch.accepts(InputFamily::Mouse));
        assert!(!InputApi::Pointer.accepts(InputFamily::Touch));
        assert!(InputApi::Mouse.accepts(InputFamily::Wheel));
    }
}

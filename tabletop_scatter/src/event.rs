// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Vec2};

/// Lifecycle stage a [`ScatterEvent`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A gesture started on the scatter.
    Start,
    /// A pure translation was applied.
    Update,
    /// The gesture ended.
    End,
    /// A wheel zoom was applied.
    Zoom,
    /// The scatter was moved programmatically.
    Move,
}

/// A committed change of a scatter's transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterEvent {
    /// Applied translation.
    pub translate: Vec2,
    /// Scale after the change.
    pub scale: f64,
    /// Applied rotation in radians.
    pub rotate: f64,
    /// Fixed point of the change, if any.
    pub about: Option<Point>,
    /// High-frequency intermediate event, such as a throw frame.
    pub fast: bool,
    /// Lifecycle stage, or `None` for transforms in the middle of a gesture.
    pub kind: Option<EventType>,
}

impl ScatterEvent {
    pub(crate) fn settled(kind: Option<EventType>, scale: f64) -> Self {
        Self {
            translate: Vec2::ZERO,
            scale,
            rotate: 0.0,
            about: None,
            fast: false,
            kind,
        }
    }
}

/// New rendered size of a resizable scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    /// Width after the change.
    pub width: f64,
    /// Height after the change.
    pub height: f64,
}

pub(crate) type TransformListener = Box<dyn FnMut(&ScatterEvent)>;
pub(crate) type ResizeListener = Box<dyn FnMut(&ResizeEvent)>;
pub(crate) type TapHandler = Box<dyn FnMut(Point)>;

/// Host callbacks attached to a scatter.
#[derive(Default)]
pub(crate) struct Hooks {
    pub(crate) transform: Vec<TransformListener>,
    pub(crate) resize: Option<ResizeListener>,
    pub(crate) tap: Option<TapHandler>,
}

impl Hooks {
    pub(crate) fn emit(&mut self, event: &ScatterEvent) {
        for listener in &mut self.transform {
            listener(event);
        }
    }

    pub(crate) fn resized(&mut self, event: &ResizeEvent) {
        if let Some(listener) = &mut self.resize {
            listener(event);
        }
    }

    pub(crate) fn tapped(&mut self, point: Point) {
        if let Some(handler) = &mut self.tap {
            handler(point);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("transform", &self.transform.len())
            .field("resize", &self.resize.is_some())
            .field("tap", &self.tap.is_some())
            .finish()
    }
}

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use log::{debug, trace};

use crate::event::{InputEvent, Phase, WheelInput};
use crate::points::{InteractionPoints, TapPolicy};
use crate::recorder::{EventRecorder, EventSink};
use crate::target::{ConformanceError, InteractionTarget, TargetCapabilities, TargetRole};
use crate::{InputApi, PointMap, extract_points};

/// Setup options shared by [`InteractionDelegate`] and
/// [`InteractionMapper`](crate::InteractionMapper).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelegateOptions {
    /// Event family to listen to.
    pub api: InputApi,
    /// Tap and long-press thresholds.
    pub tap: TapPolicy,
    /// Verify declared [`TargetCapabilities`] at construction.
    ///
    /// Defaults to on in debug builds.
    pub check_conformance: bool,
    /// Capacity of the debug event recorder; `None` disables recording.
    pub record_events: Option<usize>,
}

impl Default for DelegateOptions {
    fn default() -> Self {
        Self {
            api: InputApi::default(),
            tap: TapPolicy::default(),
            check_conformance: cfg!(debug_assertions),
            record_events: None,
        }
    }
}

impl DelegateOptions {
    /// Sets the event family.
    #[must_use]
    pub fn with_api(mut self, api: InputApi) -> Self {
        self.api = api;
        self
    }

    /// Sets the tap thresholds.
    #[must_use]
    pub fn with_tap(mut self, tap: TapPolicy) -> Self {
        self.tap = tap;
        self
    }

    /// Turns the conformance check on or off.
    #[must_use]
    pub fn with_conformance_check(mut self, check: bool) -> Self {
        self.check_conformance = check;
        self
    }

    /// Enables the debug recorder with the given capacity.
    #[must_use]
    pub fn with_recording(mut self, capacity: usize) -> Self {
        self.record_events = Some(capacity);
        self
    }
}

/// Surface side effects requested by a dispatch.
///
/// The core never touches the platform; the host applies these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The target claimed the event.
    pub captured: bool,
    /// Route further events of this pointer to the surface.
    pub capture_pointer: Option<i64>,
    /// Stop routing this pointer to the surface.
    pub release_pointer: Option<i64>,
}

impl Response {
    pub(crate) fn for_phase(event: &InputEvent, phase: Phase, captured: bool) -> Self {
        let mut response = Self {
            captured,
            ..Self::default()
        };
        if let InputEvent::Pointer(_, pointer) = event {
            match phase {
                Phase::Down if captured => response.capture_pointer = Some(pointer.pointer_id),
                Phase::Up | Phase::Cancel => response.release_pointer = Some(pointer.pointer_id),
                _ => {}
            }
        }
        response
    }
}

/// Drives one [`InteractionTarget`] from raw input on one surface.
///
/// Every event goes through [`handle`](Self::handle), which normalizes it and
/// maintains the session's [`InteractionPoints`]:
///
/// - **start**: the target may veto via `capture`; otherwise contacts are
///   registered (`interaction_started` per new key) and `on_start` runs.
/// - **move**: contacts are updated, `on_move` runs, then the previous-frame
///   baseline advances.
/// - **end**: contacts are stopped (`interaction_ended` per key), `on_end`
///   sees the release positions, then contacts are purged
///   (`interaction_finished` per key).
///
/// ```
/// use kurbo::Point;
/// use tabletop_interaction::{
///     DelegateOptions, InputEvent, InteractionDelegate, InteractionPoints,
///     InteractionTarget, Phase, PointerInput, PointerType,
/// };
///
/// #[derive(Default)]
/// struct Pan(kurbo::Vec2);
///
/// impl InteractionTarget for Pan {
///     fn on_start(&mut self, _: &InputEvent, _: &InteractionPoints) {}
///     fn on_move(&mut self, _: &InputEvent, points: &InteractionPoints) {
///         if let Some(d) = points.delta() {
///             self.0 += d.translate;
///         }
///     }
///     fn on_end(&mut self, _: &InputEvent, _: &InteractionPoints) {}
/// }
///
/// let mut delegate =
///     InteractionDelegate::new(Pan::default(), DelegateOptions::default()).unwrap();
/// let at = |phase, x: f64, t| {
///     InputEvent::Pointer(phase, PointerInput::new(1, PointerType::Touch, Point::new(x, 0.0), t))
/// };
/// delegate.handle(&at(Phase::Down, 0.0, 0.0));
/// delegate.handle(&at(Phase::Move, 5.0, 16.0));
/// delegate.handle(&at(Phase::Move, 12.0, 32.0));
/// delegate.handle(&at(Phase::Up, 12.0, 48.0));
/// assert_eq!(delegate.target().0.x, 12.0);
/// ```
#[derive(Debug)]
pub struct InteractionDelegate<D> {
    target: D,
    interaction: InteractionPoints,
    api: InputApi,
    recorder: Option<EventRecorder>,
}

impl<D: InteractionTarget> InteractionDelegate<D> {
    /// Binds `target`.
    ///
    /// Fails if conformance checking is on and the target does not declare
    /// every [`TargetCapabilities::INTERACTION_TARGET`] callback.
    pub fn new(target: D, options: DelegateOptions) -> Result<Self, ConformanceError> {
        if options.check_conformance {
            ConformanceError::check(
                TargetRole::InteractionTarget,
                target.capabilities(),
                TargetCapabilities::INTERACTION_TARGET,
            )?;
        }
        debug!("interaction delegate bound to {:?} events", options.api);
        Ok(Self {
            target,
            interaction: InteractionPoints::new(options.tap),
            api: options.api,
            recorder: options.record_events.map(EventRecorder::new),
        })
    }

    /// The bound target.
    #[must_use]
    pub fn target(&self) -> &D {
        &self.target
    }

    /// The bound target, mutably.
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unbinds and returns the target.
    pub fn into_target(self) -> D {
        self.target
    }

    /// The session's contact history.
    #[must_use]
    pub fn interaction(&self) -> &InteractionPoints {
        &self.interaction
    }

    /// Event family this delegate listens to.
    #[must_use]
    pub fn api(&self) -> InputApi {
        self.api
    }

    /// The debug recorder, if enabled.
    #[must_use]
    pub fn recorder(&self) -> Option<&EventRecorder> {
        self.recorder.as_ref()
    }

    /// Detaches the debug recorder, e.g. to replay it into another delegate.
    pub fn take_recorder(&mut self) -> Option<EventRecorder> {
        self.recorder.take()
    }

    /// Dispatches one raw event.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        if let Some(recorder) = &mut self.recorder {
            recorder.record(event);
        }
        if !self.api.accepts(event.family()) {
            trace!("ignoring {:?} event under {:?} binding", event.family(), self.api);
            return Response::default();
        }
        let Some(phase) = event.phase() else {
            if let InputEvent::Wheel(wheel) = event {
                return self.on_mouse_wheel(event, wheel);
            }
            return Response::default();
        };
        match phase {
            Phase::Down => {
                if !self.target.capture(event) {
                    trace!("target declined {:?}", event.family());
                    return Response::default();
                }
                self.on_start(event);
                Response::for_phase(event, phase, true)
            }
            Phase::Move => {
                self.on_move(event);
                Response::default()
            }
            Phase::Up | Phase::Cancel | Phase::Leave => {
                self.on_end(event);
                Response::for_phase(event, phase, false)
            }
        }
    }

    fn on_mouse_wheel(&mut self, event: &InputEvent, wheel: &WheelInput) -> Response {
        let captured = self.target.capture(event);
        if captured && self.target.capabilities().contains(TargetCapabilities::WHEEL) {
            self.target.on_mouse_wheel(wheel);
        }
        Response {
            captured,
            ..Response::default()
        }
    }

    fn on_start(&mut self, event: &InputEvent) {
        let extracted = extract_points(event);
        self.update_interaction(event, &extracted);
        self.target.on_start(event, &self.interaction);
    }

    fn on_move(&mut self, event: &InputEvent) {
        let extracted = extract_points(event);
        if extracted.is_empty() {
            return;
        }
        self.update_interaction(event, &extracted);
        self.target.on_move(event, &self.interaction);
        self.interaction.update_previous();
    }

    fn on_end(&mut self, event: &InputEvent) {
        let extracted = extract_points(event);
        for (key, point) in extracted.sorted() {
            self.interaction.stop(key, point);
            self.target.interaction_ended(event, key, point);
        }
        self.target.on_end(event, &self.interaction);
        for (key, point) in extracted.sorted() {
            self.interaction.finish(key);
            self.target.interaction_finished(event, key, point);
        }
        if self.interaction.is_finished() {
            trace!("gesture session finished");
        }
    }

    fn update_interaction(&mut self, event: &InputEvent, extracted: &PointMap) {
        let time = event.time();
        for (key, point) in extracted.sorted() {
            if self.interaction.update(key, point, time) {
                trace!("contact {key} started at ({}, {})", point.x, point.y);
                self.target.interaction_started(event, key, point);
            }
        }
    }
}

impl<D: InteractionTarget> EventSink for InteractionDelegate<D> {
    fn handle(&mut self, event: &InputEvent) -> Response {
        Self::handle(self, event)
    }
}

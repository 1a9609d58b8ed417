// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use log::{debug, trace, warn};

use crate::event::{InputEvent, Phase, WheelInput};
use crate::interaction::Interaction;
use crate::points::{Aspect, InteractionPoints};
use crate::recorder::{EventRecorder, EventSink};
use crate::target::{
    ConformanceError, InteractionTarget, MapperTarget, TargetCapabilities, TargetRole,
};
use crate::{DelegateOptions, InputApi, PointMap, Response, extract_points};

/// Drives several independent targets hosted by one surface.
///
/// New contacts are hit-tested with [`MapperTarget::find_target`] and routed
/// to the returned target for their whole lifetime. Each target receives its
/// own sub-interaction containing only its contacts, converted to the
/// surface's local coordinates with [`MapperTarget::map_position_to_point`].
///
/// Wheel events go to the target under the cursor if it declares
/// [`TargetCapabilities::WHEEL`], otherwise to the surface itself.
#[derive(Debug)]
pub struct InteractionMapper<M: MapperTarget> {
    target: M,
    interaction: Interaction<M::Id>,
    api: InputApi,
    recorder: Option<EventRecorder>,
}

impl<M: MapperTarget> InteractionMapper<M> {
    /// Binds `target`.
    ///
    /// Fails if conformance checking is on and the surface does not declare
    /// every [`TargetCapabilities::MAPPER_TARGET`] callback.
    pub fn new(target: M, options: DelegateOptions) -> Result<Self, ConformanceError> {
        if options.check_conformance {
            ConformanceError::check(
                TargetRole::MapperTarget,
                target.capabilities(),
                TargetCapabilities::MAPPER_TARGET,
            )?;
        }
        debug!("interaction mapper bound to {:?} events", options.api);
        Ok(Self {
            target,
            interaction: Interaction::new(options.tap),
            api: options.api,
            recorder: options.record_events.map(EventRecorder::new),
        })
    }

    /// The bound surface.
    #[must_use]
    pub fn target(&self) -> &M {
        &self.target
    }

    /// The bound surface, mutably.
    pub fn target_mut(&mut self) -> &mut M {
        &mut self.target
    }

    /// Unbinds and returns the surface.
    pub fn into_target(self) -> M {
        self.target
    }

    /// The session, including per-target sub-interactions.
    #[must_use]
    pub fn interaction(&self) -> &Interaction<M::Id> {
        &self.interaction
    }

    /// Event family this mapper listens to.
    #[must_use]
    pub fn api(&self) -> InputApi {
        self.api
    }

    /// The debug recorder, if enabled.
    #[must_use]
    pub fn recorder(&self) -> Option<&EventRecorder> {
        self.recorder.as_ref()
    }

    /// Detaches the debug recorder.
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
        if !self.target.capture(event) {
            return Response::default();
        }
        let global = wheel.position;
        let local = self.target.map_position_to_point(global);
        if let Some(id) = self.target.find_target(event, local, global)
            && let Some(found) = self.target.target_mut(id)
            && found.capabilities().contains(TargetCapabilities::WHEEL)
        {
            found.on_mouse_wheel(wheel);
            return Response {
                captured: true,
                ..Response::default()
            };
        }
        if self.target.capabilities().contains(TargetCapabilities::WHEEL) {
            self.target.on_mouse_wheel(wheel);
        }
        Response {
            captured: true,
            ..Response::default()
        }
    }

    fn on_start(&mut self, event: &InputEvent) {
        let extracted = extract_points(event);
        self.update_interaction(event, &extracted);
        let mapped = self.map(&extracted, &[Aspect::Current, Aspect::Start]);
        for id in mapped {
            self.dispatch(id, |target, sub| target.on_start(event, sub));
        }
    }

    fn on_move(&mut self, event: &InputEvent) {
        let extracted = extract_points(event);
        if extracted.is_empty() {
            return;
        }
        self.update_interaction(event, &extracted);
        let mapped = self.map(&extracted, &[Aspect::Current, Aspect::Previous]);
        for id in mapped {
            self.dispatch(id, |target, sub| target.on_move(event, sub));
            if let Some(sub) = self.interaction.sub_interaction_mut(id) {
                sub.update_previous();
            }
        }
        self.interaction.update_previous();
    }

    fn on_end(&mut self, event: &InputEvent) {
        let extracted = extract_points(event);
        for (key, point) in extracted.sorted() {
            self.interaction.stop(key, point);
        }
        let mapped = self.map(&extracted, &[Aspect::Ended]);
        for id in mapped {
            self.dispatch(id, |target, sub| target.on_end(event, sub));
        }
        for key in extracted.keys() {
            self.interaction.finish(key);
        }
    }

    fn update_interaction(&mut self, event: &InputEvent, extracted: &PointMap) {
        let time = event.time();
        for (key, point) in extracted.sorted() {
            if !self.interaction.update(key, point, time) {
                continue;
            }
            let local = self.target.map_position_to_point(point);
            match self.target.find_target(event, local, point) {
                Some(id) => {
                    trace!("contact {key} routed to {id:?}");
                    self.interaction.add_target(key, id);
                }
                None => trace!("contact {key} hit no target"),
            }
        }
    }

    fn map(&mut self, extracted: &PointMap, aspects: &[Aspect]) -> Vec<M::Id> {
        let target = &self.target;
        self.interaction
            .map_interaction(extracted, aspects, |p| target.map_position_to_point(p))
    }

    fn dispatch(
        &mut self,
        id: M::Id,
        f: impl FnOnce(&mut dyn InteractionTarget, &InteractionPoints),
    ) {
        let Some(sub) = self.interaction.sub_interaction(id) else {
            return;
        };
        match self.target.target_mut(id) {
            Some(target) => f(target, sub),
            None => warn!("mapper target returned unknown target {id:?}"),
        }
    }
}

impl<M: MapperTarget> EventSink for InteractionMapper<M> {
    fn handle(&mut self, event: &InputEvent) -> Response {
        Self::handle(self, event)
    }
}

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::mem;

use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace, warn};
use tabletop_geometry::{Intersection, Polygon, points};
use tabletop_interaction::{
    InputEvent, InteractionPoints, InteractionTarget, Modifiers, TargetCapabilities, WheelInput,
};
use tabletop_throw::{ThrowBody, ThrowStatus, Throwable};

use crate::event::{EventType, Hooks, ResizeEvent, ScatterEvent};
use crate::{ScatterConfig, ScatterFlags, ZOrder};

/// Velocity factor applied on a frame where a thrown scatter hits the stage edge.
pub const COLLISION_DAMPING: f64 = 0.5;

/// Rotation per wheel notch while shift is held.
pub const WHEEL_ROTATION_DEGREES: f64 = 5.0;

/// Largest relative scale change per zoom bounce frame.
pub const ZOOM_BOUNCE_STEP: f64 = 0.01;

/// Delay before a wheel zoom eases back into the scale bounds, in milliseconds.
pub const WHEEL_BOUNCE_DELAY: f64 = 200.0;

/// Delay before a pinch eases back into the scale bounds, in milliseconds.
pub const GESTURE_BOUNCE_DELAY: f64 = 100.0;

const MAX_BOUNCE_STEPS: usize = 10_000;

/// Snapshot of a scatter's placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterState {
    /// Left edge of the unscaled layout box.
    pub x: f64,
    /// Top edge of the unscaled layout box.
    pub y: f64,
    /// Scale factor.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ZoomBounce {
    anchor: Point,
    due: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Initial {
    position: Point,
    size: Size,
    scale: f64,
    rotation: f64,
}

/// A rectangular object that can be dragged, zoomed, rotated and thrown.
///
/// Placement is an unscaled layout box (`position`, `size`) in stage
/// coordinates, scaled by `scale` and rotated by `rotation` around the box
/// center. Gesture deltas arrive through the [`InteractionTarget`]
/// implementation and are applied by [`transform`](Self::transform), which
/// keeps the gesture's anchor point fixed on screen while zooming and
/// rotating.
///
/// Once a stage is set (usually by a [`ScatterContainer`](crate::ScatterContainer)),
/// a released scatter is thrown and kept on stage: it bounces back toward the
/// stage center whenever less than its throw visibility remains in view.
/// Animation advances only through [`tick`](Self::tick).
///
/// ```
/// use kurbo::{Point, Rect, Size, Vec2};
/// use tabletop_scatter::ScatterConfig;
///
/// let mut scatter = ScatterConfig::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0))
///     .with_scale_range(0.5, 4.0)
///     .build()
///     .unwrap();
/// scatter.set_stage(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
///
/// // Pan, then zoom 2x about the top-left corner.
/// scatter.transform(Vec2::new(10.0, 0.0), 1.0, 0.0, Point::ORIGIN);
/// scatter.transform(Vec2::ZERO, 2.0, 0.0, Point::new(10.0, 0.0));
/// assert_eq!(scatter.scale(), 2.0);
/// assert!((scatter.center() - Point::new(110.0, 100.0)).hypot() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Scatter {
    position: Point,
    size: Size,
    scale: f64,
    rotation: f64,
    min_scale: f64,
    max_scale: f64,
    overdo_scaling: f64,
    mouse_zoom_factor: f64,
    flags: ScatterFlags,
    auto_bring_to_front: bool,
    throw_visibility: f64,
    z_index: u64,
    stage: Option<Rect>,
    dragging: bool,
    interaction_anchor: Option<Point>,
    zoom_bounce: Option<ZoomBounce>,
    throwable: Throwable,
    throwing: bool,
    initial: Initial,
    hooks: Hooks,
}

impl Scatter {
    pub(crate) fn from_config(config: ScatterConfig) -> Self {
        let rotation = config.initial_rotation().unwrap_or_default();
        let size = config.size;
        Self {
            position: config.position,
            size,
            scale: config.start_scale,
            rotation,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            overdo_scaling: config.overdo_scaling,
            mouse_zoom_factor: config.mouse_zoom_factor,
            flags: config.flags,
            auto_bring_to_front: config.auto_bring_to_front,
            throw_visibility: config.throw_visibility.min(size.width).min(size.height),
            z_index: 0,
            stage: None,
            dragging: false,
            interaction_anchor: None,
            zoom_bounce: None,
            throwable: Throwable::new(config.throw),
            throwing: false,
            initial: Initial {
                position: config.position,
                size,
                scale: config.start_scale,
                rotation,
            },
            hooks: Hooks::default(),
        }
    }

    /// Top-left corner of the unscaled layout box.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Places the layout box's top-left corner at `position` without
    /// checking flags or emitting events.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Unscaled layout size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replaces the unscaled layout size, keeping the top-left corner.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale without moving the center or emitting events.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the rotation in radians.
    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = radians;
    }

    /// Rotation in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Sets the rotation in degrees.
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.rotation = degrees.to_radians();
    }

    /// Smallest settled scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Largest settled scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Overzoom factor allowed during a gesture.
    #[must_use]
    pub fn overdo_scaling(&self) -> f64 {
        self.overdo_scaling
    }

    /// Gesture components the scatter responds to.
    #[must_use]
    pub fn flags(&self) -> ScatterFlags {
        self.flags
    }

    /// Replaces the gesture flags.
    pub fn set_flags(&mut self, flags: ScatterFlags) {
        self.flags = flags;
    }

    /// Whether a container raises this scatter when a contact lands on it.
    #[must_use]
    pub fn auto_bring_to_front(&self) -> bool {
        self.auto_bring_to_front
    }

    /// Minimum overlap with the stage the scatter must keep.
    #[must_use]
    pub fn throw_visibility(&self) -> f64 {
        self.throw_visibility
    }

    /// Stacking order; higher is in front.
    #[must_use]
    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    /// Raises the scatter above everything allocated from `z_order` so far.
    pub fn bring_to_front(&mut self, z_order: &mut ZOrder) {
        self.z_index = z_order.next();
        trace!("scatter raised to z {}", self.z_index);
    }

    /// Stage rectangle in page coordinates, if any.
    #[must_use]
    pub fn stage(&self) -> Option<Rect> {
        self.stage
    }

    /// Sets the stage the scatter lives on, in page coordinates. Without a
    /// stage there is no containment.
    pub fn set_stage(&mut self, stage: Option<Rect>) {
        self.stage = stage;
    }

    /// Returns `true` between a gesture's start and its end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while a self-driven throw is running.
    #[must_use]
    pub fn is_throwing(&self) -> bool {
        self.throwing
    }

    /// Returns `true` while a zoom bounce is pending or running.
    #[must_use]
    pub fn is_zoom_bouncing(&self) -> bool {
        self.zoom_bounce.is_some()
    }

    /// The inertia state.
    #[must_use]
    pub fn throwable(&self) -> &Throwable {
        &self.throwable
    }

    /// The inertia state, for hosts that feed drag samples themselves.
    pub fn throwable_mut(&mut self) -> &mut Throwable {
        &mut self.throwable
    }

    /// Pivot of the last zooming gesture frame.
    #[must_use]
    pub fn interaction_anchor(&self) -> Option<Point> {
        self.interaction_anchor
    }

    /// Placement snapshot.
    #[must_use]
    pub fn state(&self) -> ScatterState {
        ScatterState {
            x: self.position.x,
            y: self.position.y,
            scale: self.scale,
            rotation: self.rotation,
        }
    }

    /// Center of the layout box, which is also the scale and rotation origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// On-screen outline: the layout box scaled and rotated about its center.
    #[must_use]
    pub fn polygon(&self) -> Polygon {
        Polygon::rect(
            self.center(),
            self.size.width * self.scale,
            self.size.height * self.scale,
            self.rotation,
        )
    }

    /// Axis-aligned bounding box of [`polygon`](Self::polygon).
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let center = self.center();
        self.polygon()
            .absolute_points()
            .fold(Rect::from_points(center, center), |rect, p| rect.union_pt(p))
    }

    /// Converts a page position into stage coordinates.
    #[must_use]
    pub fn map_to_stage(&self, point: Point) -> Point {
        match self.stage {
            Some(stage) => point - stage.origin().to_vec2(),
            None => point,
        }
    }

    /// Scale bounds a gesture may reach, including overzoom.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (
            self.min_scale / self.overdo_scaling,
            self.max_scale * self.overdo_scaling,
        )
    }

    /// `scale` clamped to the settled bounds.
    #[must_use]
    pub fn valid_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }

    /// Registers a transform listener.
    pub fn add_transform_listener(&mut self, listener: impl FnMut(&ScatterEvent) + 'static) {
        self.hooks.transform.push(Box::new(listener));
    }

    /// Removes every transform listener.
    pub fn clear_transform_listeners(&mut self) {
        self.hooks.transform.clear();
    }

    /// Sets the listener for [`ResizeEvent`]s.
    pub fn set_resize_listener(&mut self, listener: impl FnMut(&ResizeEvent) + 'static) {
        self.hooks.resize = Some(Box::new(listener));
    }

    /// Sets the handler called with the release point of every tap.
    pub fn set_tap_handler(&mut self, handler: impl FnMut(Point) + 'static) {
        self.hooks.tap = Some(Box::new(handler));
    }

    /// Applies a gesture step: translate by `translate`, then zoom by `zoom`
    /// and rotate by `rotate` radians about `anchor`, keeping `anchor` fixed.
    ///
    /// Components disabled by the scatter's flags are dropped first. The
    /// resulting scale is clamped to [`scale_limits`](Self::scale_limits),
    /// and the zoom actually applied is reduced to match.
    pub fn transform(&mut self, translate: Vec2, zoom: f64, rotate: f64, anchor: Point) {
        let delta = self.translation(translate);
        let rotate = if self.flags.contains(ScatterFlags::ROTATABLE) {
            rotate
        } else {
            0.0
        };
        let mut zoom = if self.flags.contains(ScatterFlags::SCALABLE) {
            zoom
        } else {
            1.0
        };

        if zoom == 1.0 && rotate == 0.0 {
            self.move_raw(delta);
            self.hooks.emit(&ScatterEvent {
                translate: delta,
                scale: self.scale,
                rotate: 0.0,
                about: Some(anchor),
                fast: false,
                kind: Some(EventType::Update),
            });
            return;
        }

        let origin = self.center();
        let beta = points::angle(origin, anchor);
        let distance = origin.distance(anchor);

        let (min, max) = self.scale_limits();
        let mut scale = self.scale * zoom;
        if scale < min {
            scale = min;
            zoom = scale / self.scale;
        }
        if scale > max {
            scale = max;
            zoom = scale / self.scale;
        }

        let new_origin = points::arc(anchor, beta + rotate, distance * zoom);
        self.scale = scale;
        self.rotation += rotate;
        self.move_raw(new_origin - origin + delta);

        self.hooks.emit(&ScatterEvent {
            translate: delta,
            scale,
            rotate,
            about: Some(anchor),
            fast: false,
            kind: None,
        });
        if self.flags.contains(ScatterFlags::RESIZABLE) {
            self.resize_after_transform();
        }
    }

    fn resize_after_transform(&mut self) {
        let event = ResizeEvent {
            width: self.size.width * self.scale,
            height: self.size.height * self.scale,
        };
        self.hooks.resized(&event);
    }

    /// Rotates by `radians` about `anchor`.
    pub fn rotate(&mut self, radians: f64, anchor: Point) {
        self.transform(Vec2::ZERO, 1.0, radians, anchor);
    }

    /// Rotates by `degrees` about `anchor`.
    pub fn rotate_degrees(&mut self, degrees: f64, anchor: Point) {
        self.rotate(degrees.to_radians(), anchor);
    }

    /// Moves by `delta` if the scatter is translatable.
    pub fn move_by(&mut self, delta: Vec2) {
        if !self.flags.contains(ScatterFlags::TRANSLATABLE) {
            return;
        }
        self.move_raw(delta);
        self.hooks.emit(&ScatterEvent {
            translate: delta,
            scale: self.scale,
            rotate: 0.0,
            about: None,
            fast: true,
            kind: Some(EventType::Move),
        });
    }

    /// Moves the layout box's top-left corner to `point`.
    pub fn move_to(&mut self, point: Point) {
        self.move_by(point - self.position);
    }

    /// Moves the center to `point`.
    pub fn center_at(&mut self, point: Point) {
        self.move_by(point - self.center());
    }

    /// Sets the scale immediately. The center stays put; `about` is only
    /// reported in the event and defaults to the center.
    pub fn zoom(&mut self, scale: f64, about: Option<Point>) {
        if scale == self.scale {
            return;
        }
        self.scale = scale;
        self.hooks.emit(&ScatterEvent {
            translate: Vec2::ZERO,
            scale,
            rotate: 0.0,
            about: Some(about.unwrap_or_else(|| self.center())),
            fast: false,
            kind: None,
        });
    }

    /// Restores the initial placement and stops every animation.
    pub fn reset(&mut self) {
        self.kill_animation();
        self.cancel_zoom_bounce();
        self.position = self.initial.position;
        self.size = self.initial.size;
        self.scale = self.initial.scale;
        self.rotation = self.initial.rotation;
    }

    fn mask(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.flags.contains(ScatterFlags::MOVABLE_X) {
                v.x
            } else {
                0.0
            },
            if self.flags.contains(ScatterFlags::MOVABLE_Y) {
                v.y
            } else {
                0.0
            },
        )
    }

    /// The part of `v` the scatter may translate by: nothing unless
    /// translatable, and only along movable axes.
    fn translation(&self, v: Vec2) -> Vec2 {
        if self.flags.contains(ScatterFlags::TRANSLATABLE) {
            self.mask(v)
        } else {
            Vec2::ZERO
        }
    }

    fn move_raw(&mut self, delta: Vec2) {
        self.position += self.mask(delta);
    }

    fn stage_polygon(&self) -> Option<Polygon> {
        let stage = self.stage?;
        let (w, h) = (stage.width(), stage.height());
        Some(Polygon::rect(Point::new(w / 2.0, h / 2.0), w, h, 0.0))
    }

    fn too_far_out(&self, hit: Option<Intersection>) -> bool {
        hit.is_none_or(|hit| hit.overlap < self.throw_visibility)
    }

    /// Returns `true` if less than the throw visibility of the scatter
    /// overlaps the stage. Always `false` without a stage.
    #[must_use]
    pub fn is_outside(&self) -> bool {
        self.stage_polygon()
            .is_some_and(|stage| self.too_far_out(stage.intersects_with(&self.polygon())))
    }

    /// Unit step from the scatter's center toward the stage center.
    #[must_use]
    pub fn recenter(&self) -> Option<Vec2> {
        let stage = self.stage?;
        let target = Point::new(stage.width() / 2.0, stage.height() / 2.0);
        points::normalize(target - self.center())
    }

    /// Steps the scatter toward the stage center until enough of it is in
    /// view. Returns `true` if it moved.
    pub fn bouncing(&mut self) -> bool {
        let Some(stage) = self.stage_polygon() else {
            return false;
        };
        let mut polygon = self.polygon();
        let mut hit = stage.intersects_with(&polygon);
        if !self.too_far_out(hit) {
            return false;
        }
        let Some(step) = self
            .recenter()
            .map(|v| self.mask(v))
            .filter(|v| *v != Vec2::ZERO)
        else {
            warn!("scatter is off stage but cannot move toward the stage center");
            return false;
        };
        let mut steps = 0;
        while self.too_far_out(hit) {
            if steps == MAX_BOUNCE_STEPS {
                warn!("gave up bouncing after {steps} steps");
                break;
            }
            polygon.translate(step);
            self.move_raw(step);
            hit = stage.intersects_with(&polygon);
            steps += 1;
        }
        trace!("bounced {steps} steps toward the stage center");
        true
    }

    /// Throw velocity update with containment: bounces the scatter back on
    /// stage and, if it had to, reflects the velocity off the crossed stage
    /// edges with [`COLLISION_DAMPING`]. Otherwise applies the normal damping.
    pub fn keep_on_stage(&mut self, velocity: Vec2) -> Vec2 {
        let damping = self.throwable.config().throw_damping;
        self.contain(velocity, damping, COLLISION_DAMPING)
    }

    fn contain(&mut self, velocity: Vec2, damping: f64, collision: f64) -> Vec2 {
        if !self.flags.contains(ScatterFlags::TRANSLATABLE) {
            return Vec2::ZERO;
        }
        let Some(stage) = self.stage else {
            return velocity * damping;
        };
        if !self.bouncing() {
            return velocity * damping;
        }
        let center = self.center();
        let mut v = self.mask(velocity);
        let mut factor = damping;
        if center.x < 0.0 || center.x > stage.width() {
            v.x = -v.x;
            factor = collision;
        }
        if center.y < 0.0 || center.y > stage.height() {
            v.y = -v.y;
            factor = collision;
        }
        v * factor
    }

    /// Seeds a throw from the recent gesture velocity at release time `now`.
    ///
    /// A scatter that is not translatable is never thrown.
    pub fn start_throw(&mut self, now: f64) -> ThrowStatus {
        if !self.flags.contains(ScatterFlags::TRANSLATABLE) {
            self.kill_animation();
            return ThrowStatus::Idle;
        }
        let mut throwable = mem::take(&mut self.throwable);
        let status = throwable.start_throw(now, self);
        self.throwable = throwable;
        self.throwing = status == ThrowStatus::Running;
        status
    }

    /// Advances the throw by one frame at `now`, whether or not it is
    /// self-driven.
    pub fn animate_throw(&mut self, now: f64) -> ThrowStatus {
        let mut throwable = mem::take(&mut self.throwable);
        let status = throwable.tick(now, self);
        self.throwable = throwable;
        self.throwing = status == ThrowStatus::Running;
        status
    }

    /// Cancels a running throw.
    pub fn kill_animation(&mut self) {
        self.throwable.kill_animation();
        self.throwing = false;
    }

    /// Drops a pending or running zoom bounce, leaving the scale as it is.
    pub fn cancel_zoom_bounce(&mut self) {
        self.zoom_bounce = None;
    }

    /// Schedules a zoom bounce about `about`, starting `delay` milliseconds
    /// after `now`. Replaces any pending bounce.
    pub fn check_scaling(&mut self, about: Point, delay: f64, now: f64) {
        self.zoom_bounce = Some(ZoomBounce {
            anchor: about,
            due: now + delay,
        });
    }

    /// Advances a pending zoom bounce at `now`: eases the scale back into
    /// `[min_scale, max_scale]` by at most [`ZOOM_BOUNCE_STEP`] per frame.
    /// Returns `true` while the bounce is pending or running.
    pub fn animate_zoom_bounce(&mut self, now: f64) -> bool {
        let Some(bounce) = self.zoom_bounce else {
            return false;
        };
        if now < bounce.due {
            return true;
        }
        let target = self.valid_scale(self.scale);
        if target == self.scale || !self.flags.contains(ScatterFlags::SCALABLE) {
            self.zoom_bounce = None;
            return false;
        }
        let wanted = target / self.scale;
        let zoom = wanted.clamp(1.0 - ZOOM_BOUNCE_STEP, 1.0 + ZOOM_BOUNCE_STEP);
        self.transform(Vec2::ZERO, zoom, 0.0, bounce.anchor);
        if zoom == wanted {
            self.scale = target;
        }
        true
    }

    /// Advances every animation to frame time `now`. Returns `true` while
    /// any of them needs more frames.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut animating = false;
        if self.throwing {
            animating |= self.animate_throw(now) == ThrowStatus::Running;
        }
        animating |= self.animate_zoom_bounce(now);
        animating
    }

    fn start_gesture(&mut self, now: f64) {
        self.kill_animation();
        self.throwable.observe_velocity(now);
    }

    fn gesture(&mut self, interaction: &InteractionPoints, now: f64) {
        let Some(delta) = interaction.delta() else {
            return;
        };
        self.throwable
            .add_velocity(self.translation(delta.translate), now);
        self.transform(delta.translate, delta.zoom, delta.rotate, delta.about);
        if delta.zoom != 1.0 {
            self.interaction_anchor = Some(delta.about);
        }
    }

    fn end_gesture(&mut self, now: f64) {
        self.start_throw(now);
    }

    fn on_tap(&mut self, point: Point) {
        trace!("tap at {point:?}");
        self.hooks.tapped(point);
    }
}

impl InteractionTarget for Scatter {
    fn on_start(&mut self, event: &InputEvent, _: &InteractionPoints) {
        self.start_gesture(event.time());
        self.dragging = true;
        self.interaction_anchor = None;
        self.hooks
            .emit(&ScatterEvent::settled(Some(EventType::Start), self.scale));
    }

    fn on_move(&mut self, event: &InputEvent, interaction: &InteractionPoints) {
        if self.dragging {
            self.gesture(interaction, event.time());
        }
    }

    fn on_end(&mut self, event: &InputEvent, interaction: &InteractionPoints) {
        if !self.dragging {
            return;
        }
        let now = event.time();
        if interaction.is_finished() {
            self.end_gesture(now);
            self.dragging = false;
            for (key, point) in interaction.ended().sorted() {
                if interaction.is_tap(key, now) {
                    self.on_tap(point);
                }
            }
            self.hooks
                .emit(&ScatterEvent::settled(Some(EventType::End), self.scale));
        }
        if let Some(about) = self.interaction_anchor {
            self.check_scaling(about, GESTURE_BOUNCE_DELAY, now);
        }
    }

    fn on_mouse_wheel(&mut self, event: &WheelInput) {
        self.kill_animation();
        let about = self.map_to_stage(event.position);
        if event.modifiers.contains(Modifiers::SHIFT) {
            let degrees = if event.is_up() {
                WHEEL_ROTATION_DEGREES
            } else {
                -WHEEL_ROTATION_DEGREES
            };
            self.rotate_degrees(degrees, about);
            return;
        }
        let zoom = if event.is_up() {
            self.mouse_zoom_factor
        } else {
            1.0 / self.mouse_zoom_factor
        };
        self.transform(Vec2::ZERO, zoom, 0.0, about);
        self.check_scaling(about, WHEEL_BOUNCE_DELAY, event.time);
        self.hooks
            .emit(&ScatterEvent::settled(Some(EventType::Zoom), self.scale));
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::INTERACTION_TARGET | TargetCapabilities::WHEEL
    }
}

impl ThrowBody for Scatter {
    fn move_by(&mut self, delta: Vec2) {
        let delta = self.translation(delta);
        self.move_raw(delta);
    }

    fn next_velocity(&mut self, velocity: Vec2, damping: f64) -> Vec2 {
        self.contain(velocity, damping, COLLISION_DAMPING)
    }

    fn is_outside(&self) -> bool {
        self.flags.contains(ScatterFlags::TRANSLATABLE) && Self::is_outside(self)
    }

    fn on_drag_update(&mut self, delta: Vec2) {
        self.hooks.emit(&ScatterEvent {
            translate: delta,
            scale: self.scale,
            rotate: 0.0,
            about: None,
            fast: true,
            kind: None,
        });
    }

    fn on_drag_complete(&mut self) {
        debug!("throw settled at {:?}", self.position);
        self.hooks.emit(&ScatterEvent::settled(None, self.scale));
    }
}

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};
use tabletop_throw::ThrowConfig;

use crate::Scatter;

bitflags::bitflags! {
    /// Which parts of a gesture a scatter responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScatterFlags: u8 {
        /// Accepts translation.
        const TRANSLATABLE = 1;
        /// Accepts zoom.
        const SCALABLE = 1 << 1;
        /// Accepts rotation.
        const ROTATABLE = 1 << 2;
        /// Reports a [`ResizeEvent`](crate::ResizeEvent) after zooming
        /// instead of being scaled as a picture.
        const RESIZABLE = 1 << 3;
        /// Position may change horizontally.
        const MOVABLE_X = 1 << 4;
        /// Position may change vertically.
        const MOVABLE_Y = 1 << 5;
    }
}

impl Default for ScatterFlags {
    fn default() -> Self {
        Self::TRANSLATABLE | Self::SCALABLE | Self::ROTATABLE | Self::MOVABLE_X | Self::MOVABLE_Y
    }
}

/// A [`ScatterConfig`] that cannot produce a usable scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Both `rotation` and `rotation_degrees` were given.
    ConflictingRotation,
    /// Layout size is not positive and finite.
    InvalidSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Scale bounds are not positive, or `min > max`.
    InvalidScaleRange {
        /// Requested minimum scale.
        min: f64,
        /// Requested maximum scale.
        max: f64,
    },
    /// `overdo_scaling` is below one.
    InvalidOverdo(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingRotation => {
                f.write_str("use rotation or rotation_degrees but not both")
            }
            Self::InvalidSize { width, height } => {
                write!(f, "invalid scatter size {width}x{height}")
            }
            Self::InvalidScaleRange { min, max } => {
                write!(f, "invalid scale range [{min}, {max}]")
            }
            Self::InvalidOverdo(overdo) => {
                write!(f, "overdo scaling must be at least 1, got {overdo}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Construction options for a [`Scatter`].
///
/// ```
/// use kurbo::{Point, Size};
/// use tabletop_scatter::{ConfigError, ScatterConfig};
///
/// let scatter = ScatterConfig::new(Point::new(10.0, 10.0), Size::new(200.0, 100.0))
///     .with_scale_range(0.5, 2.0)
///     .with_rotation_degrees(90.0)
///     .build()
///     .unwrap();
/// assert!((scatter.rotation_degrees() - 90.0).abs() < 1e-9);
///
/// let err = ScatterConfig::new(Point::ORIGIN, Size::new(10.0, 10.0))
///     .with_rotation(1.0)
///     .with_rotation_degrees(45.0)
///     .build()
///     .unwrap_err();
/// assert_eq!(err, ConfigError::ConflictingRotation);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterConfig {
    /// Top-left corner of the unscaled layout box, in stage coordinates.
    pub position: Point,
    /// Unscaled layout size.
    pub size: Size,
    /// Initial scale.
    pub start_scale: f64,
    /// Smallest scale a gesture settles at.
    pub min_scale: f64,
    /// Largest scale a gesture settles at.
    pub max_scale: f64,
    /// How far past the scale bounds a live gesture may go, as a factor.
    pub overdo_scaling: f64,
    /// Zoom step per wheel notch.
    pub mouse_zoom_factor: f64,
    /// Gesture components the scatter responds to.
    pub flags: ScatterFlags,
    /// Raise the scatter when a contact lands on it.
    pub auto_bring_to_front: bool,
    /// Initial rotation in radians.
    pub rotation: Option<f64>,
    /// Initial rotation in degrees.
    pub rotation_degrees: Option<f64>,
    /// Minimum overlap with the stage a scatter must keep. Clamped to the
    /// smaller side of the layout size.
    pub throw_visibility: f64,
    /// Inertia tuning.
    pub throw: ThrowConfig,
}

impl ScatterConfig {
    /// Options with the stock defaults.
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            start_scale: 1.0,
            min_scale: 0.1,
            max_scale: 1.0,
            overdo_scaling: 1.0,
            mouse_zoom_factor: 1.1,
            flags: ScatterFlags::default(),
            auto_bring_to_front: true,
            rotation: None,
            rotation_degrees: None,
            throw_visibility: 44.0,
            throw: ThrowConfig::default(),
        }
    }

    /// Options for a scatter bound to an on-screen element, which may be
    /// overzoomed by half during a gesture.
    #[must_use]
    pub fn dom_defaults(position: Point, size: Size) -> Self {
        Self {
            overdo_scaling: 1.5,
            ..Self::new(position, size)
        }
    }

    /// Sets the initial scale.
    #[must_use]
    pub fn with_start_scale(mut self, scale: f64) -> Self {
        self.start_scale = scale;
        self
    }

    /// Sets the settled scale bounds.
    #[must_use]
    pub fn with_scale_range(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Sets the overzoom factor.
    #[must_use]
    pub fn with_overdo_scaling(mut self, overdo: f64) -> Self {
        self.overdo_scaling = overdo;
        self
    }

    /// Sets the wheel zoom step.
    #[must_use]
    pub fn with_mouse_zoom_factor(mut self, factor: f64) -> Self {
        self.mouse_zoom_factor = factor;
        self
    }

    /// Sets the gesture flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ScatterFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Enables or disables raising on touch.
    #[must_use]
    pub fn with_auto_bring_to_front(mut self, enabled: bool) -> Self {
        self.auto_bring_to_front = enabled;
        self
    }

    /// Sets the initial rotation in radians.
    #[must_use]
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = Some(radians);
        self
    }

    /// Sets the initial rotation in degrees.
    #[must_use]
    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees = Some(degrees);
        self
    }

    /// Sets the minimum visible overlap with the stage.
    #[must_use]
    pub fn with_throw_visibility(mut self, visibility: f64) -> Self {
        self.throw_visibility = visibility;
        self
    }

    /// Sets the inertia tuning.
    #[must_use]
    pub fn with_throw(mut self, throw: ThrowConfig) -> Self {
        self.throw = throw;
        self
    }

    /// Initial rotation in radians, after checking that at most one form was
    /// given.
    pub fn initial_rotation(&self) -> Result<f64, ConfigError> {
        match (self.rotation, self.rotation_degrees) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingRotation),
            (Some(radians), None) => Ok(radians),
            (None, Some(degrees)) => Ok(degrees.to_radians()),
            (None, None) => Ok(0.0),
        }
    }

    /// Checks every option without building.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_rotation()?;
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidSize { width, height });
        }
        let (min, max) = (self.min_scale, self.max_scale);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidScaleRange { min, max });
        }
        if self.overdo_scaling.is_nan() || self.overdo_scaling < 1.0 {
            return Err(ConfigError::InvalidOverdo(self.overdo_scaling));
        }
        Ok(())
    }

    /// Validates the options and creates the scatter.
    pub fn build(self) -> Result<Scatter, ConfigError> {
        self.validate()?;
        Ok(Scatter::from_config(self))
    }
}

// Copyright 2026 the Tabletop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Identifies one contact among several simultaneous ones.
///
/// Displays as `"mouse"`, `"stylus"`, or the decimal pointer/touch id, and
/// parses back from the same strings.
///
/// Keys are ordered (`Mouse < Stylus < Id`, ids numerically) so that pair
/// selection over a [`PointMap`](crate::PointMap) is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKey {
    /// The mouse while any button is held.
    Mouse,
    /// A stylus reported through the touch API.
    Stylus,
    /// A pointer or touch identifier.
    Id(i64),
}

impl PointerKey {
    /// Returns `true` for [`PointerKey::Stylus`].
    #[must_use]
    pub fn is_stylus(self) -> bool {
        self == Self::Stylus
    }
}

impl fmt::Display for PointerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mouse => f.write_str("mouse"),
            Self::Stylus => f.write_str("stylus"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Error returned when a string is not a valid [`PointerKey`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKeyError;

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected \"mouse\", \"stylus\" or an integer pointer id")
    }
}

impl core::error::Error for ParseKeyError {}

impl FromStr for PointerKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mouse" => Ok(Self::Mouse),
            "stylus" => Ok(Self::Stylus),
            other => other.parse().map(Self::Id).map_err(|_| ParseKeyError),
        }
    }
}

use crate::CutError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Width and height of a rectangular piece of material, in a fixed linear unit (centimeters for panels).
/// Both sides are guaranteed to be positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dimension {
    width: f32,
    height: f32,
}

impl Dimension {
    pub fn try_new(width: f32, height: f32) -> Result<Self, CutError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        match valid(width) && valid(height) {
            true => Ok(Dimension { width, height }),
            false => Err(CutError::InvalidDimension { width, height }),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The same dimension turned by 90°
    pub fn rotated(&self) -> Self {
        Dimension {
            width: self.height,
            height: self.width,
        }
    }

    pub fn oriented(&self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::AsGiven => *self,
            Orientation::Rotated => self.rotated(),
        }
    }

    pub fn min_side(&self) -> f32 {
        f32::min(self.width, self.height)
    }

    pub fn max_side(&self) -> f32 {
        f32::max(self.width, self.height)
    }

    /// True if `self` fits inside `other` without rotating either
    pub fn fits_within(&self, other: &Dimension) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// True if `self` fits inside `other` as given or turned by 90°
    pub fn fits_within_any_orientation(&self, other: &Dimension) -> bool {
        self.min_side() <= other.min_side() && self.max_side() <= other.max_side()
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<(f32, f32)> for Dimension {
    type Error = CutError;

    fn try_from((width, height): (f32, f32)) -> Result<Self, Self::Error> {
        Dimension::try_new(width, height)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            width: f32,
            height: f32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Dimension::try_new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

/// Orientation of a placed part relative to how it was requested
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    AsGiven,
    /// Turned by 90°, width and height swapped
    Rotated,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::AsGiven, Orientation::Rotated];

    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Rotated)
    }
}

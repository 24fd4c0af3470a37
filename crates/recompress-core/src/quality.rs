//! The lossy-encoder quality knob.
//!
//! Quality is normalized to `[0.0, 1.0]`, the same range a canvas
//! `toDataURL("image/jpeg", q)` call takes. Sliders that work in percent go
//! through [`Quality::from_percent`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from constructing a [`Quality`].
#[derive(Debug, Error, PartialEq)]
pub enum QualityError {
    #[error("Quality must be a number, got NaN")]
    NotANumber,

    #[error("Quality {0} is outside 0.0..=1.0")]
    OutOfRange(f32),

    #[error("Quality percent {0} is outside 0..=100")]
    PercentOutOfRange(u8),
}

/// A quality value in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Quality(f32);

impl Quality {
    pub const MIN: Quality = Quality(0.0);
    pub const MAX: Quality = Quality(1.0);

    /// Validate a unit-range value.
    pub fn new(value: f32) -> Result<Self, QualityError> {
        if value.is_nan() {
            return Err(QualityError::NotANumber);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(QualityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Build from a 0..=100 slider value.
    pub fn from_percent(percent: u8) -> Result<Self, QualityError> {
        if percent > 100 {
            return Err(QualityError::PercentOutOfRange(percent));
        }
        Ok(Self(f32::from(percent) / 100.0))
    }

    /// Clamp any value into range. NaN maps to the minimum.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            Self::MIN
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// The normalized value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Quality on the JPEG encoder's 1..=100 scale.
    pub fn to_jpeg_quality(self) -> u8 {
        // In range by construction, so the cast cannot truncate.
        ((self.0 * 100.0).round() as u8).clamp(1, 100)
    }

    /// Display label with two decimals, e.g. `"0.50"`.
    pub fn label(self) -> String {
        format!("{:.2}", self.0)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(0.8)
    }
}

impl TryFrom<f32> for Quality {
    type Error = QualityError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for f32 {
    fn from(q: Quality) -> Self {
        q.0
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

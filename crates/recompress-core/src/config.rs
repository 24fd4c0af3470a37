//! Compressor configuration.
//!
//! Deserialized from a plain object on the page (camelCase keys); every field
//! has a default so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quality::{Quality, QualityError};

/// Default longest edge accepted on load. Matches common canvas limits.
pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;

/// Errors from [`CompressorConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid initial quality: {0}")]
    InitialQuality(#[from] QualityError),

    #[error("maxDimension must be non-zero")]
    ZeroMaxDimension,

    #[error("filenameExtension must not be empty")]
    EmptyExtension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompressorConfig {
    /// Quality used until the user moves the slider (0.0 to 1.0).
    pub initial_quality: f32,
    /// Prepended to the timestamp in download filenames.
    pub filename_prefix: String,
    /// Download filename extension, without the dot.
    pub filename_extension: String,
    /// Decimal places in human-readable sizes.
    pub size_decimals: u8,
    /// Largest accepted width or height after decode.
    pub max_dimension: u32,
    /// Apply the EXIF orientation tag on load.
    pub apply_orientation: bool,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            initial_quality: Quality::default().value(),
            filename_prefix: "compressed_".to_string(),
            filename_extension: "jpeg".to_string(),
            size_decimals: 2,
            max_dimension: DEFAULT_MAX_DIMENSION,
            apply_orientation: true,
        }
    }
}

impl CompressorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Quality::new(self.initial_quality)?;
        if self.max_dimension == 0 {
            return Err(ConfigError::ZeroMaxDimension);
        }
        if self.filename_extension.trim().is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(())
    }

    /// The initial quality as a validated value, clamped if out of range.
    pub fn initial_quality(&self) -> Quality {
        Quality::clamped(self.initial_quality)
    }
}

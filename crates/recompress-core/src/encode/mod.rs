//! Re-encoding pipeline.
//!
//! A [`SourceImage`] is drawn onto a [`RasterSurface`] at native resolution,
//! and the surface is serialized as JPEG at the requested [`Quality`]. The
//! result depends only on those two inputs.

mod jpeg;
mod surface;

pub use jpeg::{encode_jpeg, encode_surface, EncodeError};
pub use surface::RasterSurface;

use crate::decode::SourceImage;
use crate::quality::Quality;

/// MIME type of every encoded result.
pub const OUTPUT_MIME: &str = "image/jpeg";

/// The output of one re-encode. Replaced, never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedResult {
    bytes: Vec<u8>,
    quality: Quality,
}

impl EncodedResult {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Encoded length in bytes.
    pub fn size(&self) -> u64 {
        crate::size::size_of(&self.bytes)
    }

    /// Quality this result was produced at.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn mime_type(&self) -> &'static str {
        OUTPUT_MIME
    }
}

/// Re-encode a source image as JPEG at `quality`.
pub fn encode(source: &SourceImage, quality: Quality) -> Result<EncodedResult, EncodeError> {
    let surface = RasterSurface::render(source);
    let bytes = encode_surface(&surface, quality)?;

    log::debug!(
        "encoded {}x{} at quality {}: {} -> {} bytes",
        source.width,
        source.height,
        quality,
        source.original_size,
        bytes.len()
    );

    Ok(EncodedResult { bytes, quality })
}

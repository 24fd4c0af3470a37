//! Recompress Core - image re-encoding library
//!
//! Takes a user-supplied image, decodes it, re-encodes it as JPEG at a chosen
//! quality and reports the sizes before and after. Browser glue lives in the
//! `recompress-wasm` crate; nothing here depends on a DOM.
//!
//! The three building blocks are [`load`], [`encode`] and [`size_of`].
//! [`CompressorSession`] ties them together for an interactive page.

pub mod config;
pub mod data_url;
pub mod decode;
pub mod download;
pub mod encode;
pub mod quality;
pub mod session;
pub mod size;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{CompressorConfig, ConfigError};
pub use data_url::{parse_data_url, to_data_url, DataUrl, DataUrlError};
pub use decode::{is_image_mime, load, DecodeError, Orientation, SourceImage};
pub use download::{download_filename, Download};
pub use encode::{encode, EncodeError, EncodedResult, OUTPUT_MIME};
pub use quality::{Quality, QualityError};
pub use session::{CompressorSession, DisplayState, LoadOutcome, RequestToken, SessionError};
pub use size::{format_bytes, size_of};

/// Load and re-encode in one call.
pub fn recompress(
    bytes: &[u8],
    mime: &str,
    quality: Quality,
    config: &CompressorConfig,
) -> Result<EncodedResult, SessionError> {
    let source = load(bytes, mime, config)?;
    Ok(encode(&source, quality)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

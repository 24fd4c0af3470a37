//! Turning user-supplied files into decoded source images.
//!
//! This module provides functionality for:
//! - Gating files on their `image/*` MIME type before any decoding
//! - Sniffing the real container format from the bytes (PNG, JPEG, GIF, BMP, WebP)
//! - Applying the EXIF orientation so pixels match what the browser displayed
//!
//! Decoding is synchronous; in the browser it runs inside WASM after the page
//! has finished reading the file.

mod load;
mod types;

pub use load::{decode_source, extract_orientation, is_image_mime, load};
pub use types::{DecodeError, Orientation, SourceImage};

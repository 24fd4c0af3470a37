//! Core types for loading source images.

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for loading a user-supplied file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file's MIME type is not `image/*`. Raised before any decoding.
    #[error("Not an image file (type \"{mime}\")")]
    NotAnImage { mime: String },

    /// The bytes are empty or not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but the data could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Decoded dimensions exceed the configured maximum edge length.
    #[error("Image too large: {width}x{height} exceeds the {max} pixel edge limit")]
    TooLarge { width: u32, height: u32, max: u32 },
}

impl DecodeError {
    /// True when the file was turned away by the MIME check alone.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DecodeError::NotAnImage { .. })
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded user image, ready to be rendered and re-encoded.
///
/// Pixels are RGBA in row-major order with orientation already applied, so
/// `width`/`height` are the dimensions as displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    /// Displayed width in pixels.
    pub width: u32,
    /// Displayed height in pixels.
    pub height: u32,
    /// RGBA pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
    /// Byte length of the file as supplied.
    pub original_size: u64,
    /// Container format detected from the file contents.
    pub format: ImageFormat,
    /// EXIF orientation found in the file (already applied to `pixels`).
    pub orientation: Orientation,
}

impl SourceImage {
    /// Build from an RGBA buffer produced by the decoder.
    pub fn from_rgba_image(
        img: image::RgbaImage,
        original_size: u64,
        format: ImageFormat,
        orientation: Orientation,
    ) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
            original_size,
            format,
            orientation,
        }
    }

    /// MIME type of the source container, e.g. `image/png`.
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// True if any pixel is not fully opaque.
    pub fn has_transparency(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] != u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_source_image_from_rgba() {
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([1, 2, 3, 255]));
        let src = SourceImage::from_rgba_image(img, 1234, ImageFormat::Png, Orientation::Normal);

        assert_eq!(src.width, 4);
        assert_eq!(src.height, 2);
        assert_eq!(src.pixels.len(), 4 * 2 * 4);
        assert_eq!(src.original_size, 1234);
        assert_eq!(src.mime_type(), "image/png");
        assert!(!src.has_transparency());
    }

    #[test]
    fn test_source_image_transparency() {
        let mut img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, image::Rgba([0, 0, 0, 10]));
        let src = SourceImage::from_rgba_image(img, 0, ImageFormat::Png, Orientation::Normal);
        assert!(src.has_transparency());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::NotAnImage {
            mime: "text/plain".to_string(),
        };
        assert_eq!(err.to_string(), "Not an image file (type \"text/plain\")");
        assert!(err.is_rejection());

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
        assert!(!err.is_rejection());
    }
}

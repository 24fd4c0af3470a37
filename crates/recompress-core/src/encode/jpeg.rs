//! JPEG serialization of a rendered raster surface.
//!
//! Uses the `image` crate's baseline JPEG encoder. Output is deterministic for
//! a given build of that encoder.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use super::RasterSurface;
use crate::quality::Quality;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Baseline JPEG cannot address edges beyond 65535 pixels
    #[error("Image too large for JPEG: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Serialize a raster surface as JPEG at the given quality.
pub fn encode_surface(surface: &RasterSurface, quality: Quality) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(
        &surface.pixels,
        surface.width,
        surface.height,
        quality.to_jpeg_quality(),
    )
}

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is on the encoder's 1..=100 scale and is clamped into it.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(EncodeError::TooLarge { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128);
            }
        }
        pixels
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&gradient(64, 48), 64, 48, 80).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_surface_uses_quality_scale() {
        let surface = RasterSurface {
            width: 64,
            height: 64,
            pixels: gradient(64, 64),
        };
        let q = Quality::new(0.5).unwrap();

        let via_surface = encode_surface(&surface, q).unwrap();
        let direct = encode_jpeg(&surface.pixels, 64, 64, 50).unwrap();
        assert_eq!(via_surface, direct);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let short = vec![128u8; 99 * 100 * 3];
        assert!(matches!(
            encode_jpeg(&short, 100, 100, 90),
            Err(EncodeError::InvalidPixelData { .. })
        ));

        let long = vec![128u8; 101 * 100 * 3];
        assert!(matches!(
            encode_jpeg(&long, 100, 100, 90),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 100, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 100, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_too_large() {
        assert!(matches!(
            encode_jpeg(&[], 70_000, 1, 90),
            Err(EncodeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_single_pixel() {
        let jpeg = encode_jpeg(&[255, 0, 0], 1, 1, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}

//! Loading user-supplied files into a [`SourceImage`].

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, Orientation, SourceImage};
use crate::config::CompressorConfig;

/// Check whether a MIME type names an image (`image/*`).
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Load a user-supplied file.
///
/// The MIME type is checked first; anything that isn't `image/*` is turned
/// away with `DecodeError::NotAnImage` and the bytes are never touched.
/// The actual format is then sniffed from the contents, so a mislabeled file
/// still decodes if its bytes are a supported image.
///
/// # Errors
///
/// * `NotAnImage` - MIME type is not `image/*`
/// * `InvalidFormat` - empty input, or contents are not a supported format
/// * `CorruptedFile` - recognized format that fails to decode
/// * `TooLarge` - an edge exceeds `config.max_dimension`
pub fn load(
    bytes: &[u8],
    mime: &str,
    config: &CompressorConfig,
) -> Result<SourceImage, DecodeError> {
    if !is_image_mime(mime) {
        return Err(DecodeError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    decode_source(bytes, config)
}

/// Decode image bytes without a MIME check.
pub fn decode_source(bytes: &[u8], config: &CompressorConfig) -> Result<SourceImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    // Header-only pass so oversized images are refused before allocating.
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(map_image_error)?;
    if width > config.max_dimension || height > config.max_dimension {
        return Err(DecodeError::TooLarge {
            width,
            height,
            max: config.max_dimension,
        });
    }

    let img = reader.decode().map_err(map_image_error)?;

    let orientation = if config.apply_orientation {
        extract_orientation(bytes)
    } else {
        Orientation::Normal
    };
    let oriented = apply_orientation(img, orientation);

    log::debug!(
        "loaded {:?} image {}x{} ({} bytes, orientation {:?})",
        format,
        oriented.width(),
        oriented.height(),
        bytes.len(),
        orientation
    );

    Ok(SourceImage::from_rgba_image(
        oriented.into_rgba8(),
        bytes.len() as u64,
        format,
        orientation,
    ))
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}

/// Read the EXIF orientation from any container kamadak-exif understands.
///
/// Returns `Orientation::Normal` if there is no EXIF data or no orientation tag.
pub fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

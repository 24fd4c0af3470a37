//! The downloadable artifact for the current result.

use serde::Serialize;

use crate::config::CompressorConfig;
use crate::encode::{EncodedResult, OUTPUT_MIME};

/// A file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(result: &EncodedResult, config: &CompressorConfig, timestamp_ms: u64) -> Self {
        Self {
            filename: download_filename(config, timestamp_ms),
            mime: OUTPUT_MIME,
            bytes: result.bytes().to_vec(),
        }
    }
}

/// `"{prefix}{timestamp_ms}.{extension}"`, e.g. `compressed_1700000000000.jpeg`.
pub fn download_filename(config: &CompressorConfig, timestamp_ms: u64) -> String {
    format!(
        "{}{}.{}",
        config.filename_prefix,
        timestamp_ms,
        config.filename_extension.trim().trim_start_matches('.')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{Orientation, SourceImage};
    use crate::encode::encode;
    use crate::quality::Quality;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn test_default_filename() {
        let config = CompressorConfig::default();
        assert_eq!(
            download_filename(&config, 1_700_000_000_000),
            "compressed_1700000000000.jpeg"
        );
    }

    #[test]
    fn test_custom_filename() {
        let mut config = CompressorConfig::default();
        config.filename_prefix = "small-".to_string();
        config.filename_extension = ".jpg".to_string();
        assert_eq!(download_filename(&config, 42), "small-42.jpg");
    }

    #[test]
    fn test_download_carries_result_bytes() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let src = SourceImage::from_rgba_image(img, 0, ImageFormat::Png, Orientation::Normal);
        let result = encode(&src, Quality::default()).unwrap();

        let download = Download::new(&result, &CompressorConfig::default(), 7);
        assert_eq!(download.filename, "compressed_7.jpeg");
        assert_eq!(download.mime, "image/jpeg");
        assert_eq!(download.bytes, result.bytes());
    }
}

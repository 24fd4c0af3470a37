//! Stateless re-encoding bindings.
//!
//! For pages that don't need a session: one call from file bytes to JPEG.
//!
//! ```typescript
//! import { recompress, format_bytes } from '@recompress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const jpeg = recompress(bytes, file.type, 0.5);
//! console.log(`${format_bytes(file.size, 2)} -> ${format_bytes(jpeg.size, 2)}`);
//! ```

use crate::types::JsEncodedImage;
use recompress_core::{CompressorConfig, Quality};
use wasm_bindgen::prelude::*;

/// Decode `bytes` and re-encode as JPEG at `quality` (0.0 to 1.0).
///
/// # Errors
///
/// Returns an error if:
/// - `mime` is not an `image/*` type
/// - The bytes are not a supported image or are corrupted
/// - `quality` is NaN or outside 0.0..=1.0
#[wasm_bindgen]
pub fn recompress(bytes: &[u8], mime: &str, quality: f32) -> Result<JsEncodedImage, JsValue> {
    let quality = Quality::new(quality).map_err(|e| JsValue::from_str(&e.to_string()))?;
    recompress_core::recompress(bytes, mime, quality, &CompressorConfig::default())
        .map(JsEncodedImage::from_owned)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a byte count with base-1024 units, e.g. "12.34 KB".
#[wasm_bindgen]
pub fn format_bytes(bytes: f64, decimals: i32) -> String {
    recompress_core::format_bytes(bytes_from_f64(bytes), decimals)
}

/// Check whether a MIME type is `image/*`.
#[wasm_bindgen]
pub fn is_image_mime(mime: &str) -> bool {
    recompress_core::is_image_mime(mime)
}

/// Wrap bytes in a base64 `data:` URL.
#[wasm_bindgen]
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    recompress_core::to_data_url(mime, bytes)
}

/// JS numbers to byte counts. Negative, NaN and fractional parts are dropped.
fn bytes_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

//! WASM-compatible wrapper types.

use recompress_core::{format_bytes, EncodedResult};
use wasm_bindgen::prelude::*;

/// A re-encoded JPEG handed to JavaScript.
///
/// # Memory Management
///
/// The bytes live in WASM memory until `bytes()` copies them into a
/// `Uint8Array`. wasm-bindgen's finalizer frees the wrapper; the generated
/// `free()` releases it early.
#[wasm_bindgen]
pub struct JsEncodedImage {
    bytes: Vec<u8>,
    quality: f32,
    quality_label: String,
}

#[wasm_bindgen]
impl JsEncodedImage {
    /// Encoded size in bytes.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Quality the image was encoded at (0.0 to 1.0).
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.quality
    }

    #[wasm_bindgen(getter, js_name = qualityLabel)]
    pub fn quality_label(&self) -> String {
        self.quality_label.clone()
    }

    /// Always `image/jpeg`.
    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        recompress_core::OUTPUT_MIME.to_string()
    }

    /// Size formatted for display, e.g. "12.34 KB".
    #[wasm_bindgen(js_name = formattedSize)]
    pub fn formatted_size(&self, decimals: i32) -> String {
        format_bytes(self.bytes.len() as u64, decimals)
    }

    /// Returns the JPEG bytes as a Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl JsEncodedImage {
    pub(crate) fn from_result(result: &EncodedResult) -> Self {
        Self::from_owned(result.clone())
    }

    pub(crate) fn from_owned(result: EncodedResult) -> Self {
        let quality = result.quality();
        Self {
            quality: quality.value(),
            quality_label: quality.label(),
            bytes: result.into_bytes(),
        }
    }
}

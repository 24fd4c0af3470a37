//! Session bindings for the interactive compressor page.
//!
//! The page owns one `CompressorSession` and drives it from its event
//! handlers:
//!
//! ```typescript
//! const session = new CompressorSession({ initialQuality: 0.8 });
//!
//! input.addEventListener('change', async () => {
//!   const file = input.files[0];
//!   let token;
//!   try {
//!     token = session.beginLoad(file.type);
//!   } catch (err) {
//!     alert('Please select an image file.');
//!     return;
//!   }
//!   const report = session.completeLoad(token, new Uint8Array(await file.arrayBuffer()));
//!   if (report.kind !== 'stale') render(session.display());
//! });
//!
//! slider.addEventListener('input', () => {
//!   session.setQuality(parseFloat(slider.value));
//!   render(session.display());
//! });
//! ```

use recompress_core::{
    CompressorConfig, CompressorSession, DisplayState, LoadOutcome, Quality, RequestToken,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::JsEncodedImage;

/// Outcome of a load, as seen by JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct LoadReport {
    kind: &'static str,
    message: Option<String>,
}

impl From<&LoadOutcome> for LoadReport {
    fn from(outcome: &LoadOutcome) -> Self {
        Self {
            kind: outcome.kind(),
            message: outcome.message(),
        }
    }
}

#[wasm_bindgen(js_name = CompressorSession)]
pub struct JsCompressorSession {
    inner: CompressorSession,
}

#[wasm_bindgen(js_class = CompressorSession)]
impl JsCompressorSession {
    /// Create a session. `config` may be `undefined` or a partial config object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCompressorSession, JsValue> {
        let config: CompressorConfig = if config.is_undefined() || config.is_null() {
            CompressorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(to_js_error)?;
        Ok(Self::with_config(config))
    }

    /// Start loading a file of type `mime`. Throws for non-image types.
    ///
    /// The returned token must be passed to `completeLoad`.
    #[wasm_bindgen(js_name = beginLoad)]
    pub fn begin_load(&mut self, mime: &str) -> Result<f64, JsValue> {
        self.inner
            .begin_load(mime)
            .map(|token| token.value() as f64)
            .map_err(to_js_error)
    }

    /// Finish a load. Returns `{ kind, message }` where kind is one of
    /// "loaded", "rejected", "failed" or "stale".
    #[wasm_bindgen(js_name = completeLoad)]
    pub fn complete_load(&mut self, token: f64, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let token = token_from_f64(token)
            .ok_or_else(|| JsValue::from_str("Invalid request token"))?;
        let report = LoadReport::from(&self.inner.complete_load(token, bytes));
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Type check and load in one call.
    pub fn select(&mut self, mime: &str, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let report = LoadReport::from(&self.inner.select(mime, bytes));
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Set quality from a 0.0 to 1.0 slider.
    #[wasm_bindgen(js_name = setQuality)]
    pub fn set_quality(&mut self, quality: f32) -> Result<(), JsValue> {
        let quality = Quality::new(quality).map_err(to_js_error)?;
        self.inner.set_quality(quality).map_err(to_js_error)
    }

    /// Set quality from a 0 to 100 slider.
    #[wasm_bindgen(js_name = setQualityPercent)]
    pub fn set_quality_percent(&mut self, percent: f64) -> Result<(), JsValue> {
        let percent = percent_from_f64(percent).ok_or_else(|| {
            JsValue::from_str(&format!("Quality percent must be 0 to 100, got {percent}"))
        })?;
        let quality = Quality::from_percent(percent).map_err(to_js_error)?;
        self.inner.set_quality(quality).map_err(to_js_error)
    }

    /// Current display values: `{ qualityLabel, originalSize, compressedSize,
    /// width, height, error }`.
    pub fn display(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.display_state())?)
    }

    /// The current JPEG, if an image is loaded.
    pub fn compressed(&self) -> Option<JsEncodedImage> {
        self.inner.result().map(JsEncodedImage::from_result)
    }

    /// Filename for the download link, stamped with the current time.
    #[wasm_bindgen(js_name = downloadFilename)]
    pub fn download_filename(&self) -> Option<String> {
        self.download_filename_at(js_sys::Date::now() as u64)
    }

    /// The current JPEG as a data URL for `<img src>` and `<a href>`.
    #[wasm_bindgen(js_name = compressedDataUrl)]
    pub fn compressed_data_url(&self) -> Option<String> {
        self.inner.compressed_data_url()
    }
}

impl JsCompressorSession {
    pub(crate) fn with_config(config: CompressorConfig) -> Self {
        Self {
            inner: CompressorSession::new(config),
        }
    }

    fn display_state(&self) -> DisplayState {
        self.inner.display()
    }

    fn download_filename_at(&self, timestamp_ms: u64) -> Option<String> {
        self.inner
            .download(timestamp_ms)
            .map(|download| download.filename)
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Tokens cross the boundary as JS numbers; only positive integers are valid.
fn token_from_f64(value: f64) -> Option<RequestToken> {
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 {
        Some(RequestToken::from_raw(value as u64))
    } else {
        None
    }
}

/// Slider percentages arrive as JS numbers; only integers in 0..=100 are valid.
fn percent_from_f64(value: f64) -> Option<u8> {
    if (0.0..=100.0).contains(&value) && value.fract() == 0.0 {
        Some(value as u8)
    } else {
        None
    }
}

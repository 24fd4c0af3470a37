//! Recompress WASM - WebAssembly bindings for Recompress
//!
//! Exposes the recompress-core re-encoder to the browser page.
//!
//! # Module Structure
//!
//! - `session` - `CompressorSession`, the stateful handle the page drives
//! - `encode` - Stateless helpers (one-shot recompress, size formatting)
//! - `types` - WASM-compatible wrapper for encoded images
//!
//! # Usage
//!
//! ```typescript
//! import init, { CompressorSession } from '@recompress/wasm';
//!
//! await init();
//!
//! const session = new CompressorSession();
//! const report = session.select(file.type, new Uint8Array(await file.arrayBuffer()));
//! console.log(report.kind, session.display());
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod session;
mod types;

#[cfg(test)]
mod fixtures;

pub use encode::{format_bytes, is_image_mime, recompress, to_data_url};
pub use session::JsCompressorSession;
pub use types::JsEncodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Change console log verbosity ("error", "warn", "info", "debug", "trace", "off").
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(level.trim().parse().unwrap_or(log::LevelFilter::Warn));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

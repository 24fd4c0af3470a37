//! `data:` URLs for handing encoded images to `<img>` and download links.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DataUrlError {
    #[error("Not a data URL")]
    MissingScheme,

    #[error("Data URL is not base64-encoded")]
    MissingBase64Marker,

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// A parsed base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Format bytes as `data:{mime};base64,{payload}`.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Parse a base64 data URL back into its MIME type and bytes.
pub fn parse_data_url(url: &str) -> Result<DataUrl, DataUrlError> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or(DataUrlError::MissingScheme)?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or(DataUrlError::MissingBase64Marker)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(DataUrlError::MissingBase64Marker)?;

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| DataUrlError::InvalidBase64(e.to_string()))?;

    Ok(DataUrl {
        mime: mime.to_string(),
        bytes,
    })
}

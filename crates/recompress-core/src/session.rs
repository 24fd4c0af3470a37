//! The compressor session: one current image, one quality, one result.
//!
//! Every load is tagged with a [`RequestToken`]. Tokens increase
//! monotonically and only the most recently issued one may change the
//! session, so a slow load that finishes after a newer selection is dropped
//! instead of overwriting it.

use serde::Serialize;
use thiserror::Error;

use crate::config::CompressorConfig;
use crate::data_url::to_data_url;
use crate::decode::{decode_source, is_image_mime, DecodeError, SourceImage};
use crate::download::Download;
use crate::encode::{encode, EncodeError, EncodedResult};
use crate::quality::Quality;
use crate::size::format_bytes;

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// What happened to a load request.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The image replaced the previous one and was re-encoded.
    Loaded,
    /// Not an image; the session is unchanged.
    Rejected(DecodeError),
    /// Decode or encode failed; the session is now in its error state.
    Failed(SessionError),
    /// A newer request was issued first; nothing changed.
    Stale,
}

impl LoadOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded => "loaded",
            LoadOutcome::Rejected(_) => "rejected",
            LoadOutcome::Failed(_) => "failed",
            LoadOutcome::Stale => "stale",
        }
    }

    /// Message to show the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            LoadOutcome::Rejected(err) => Some(err.to_string()),
            LoadOutcome::Failed(err) => Some(err.to_string()),
            LoadOutcome::Loaded | LoadOutcome::Stale => None,
        }
    }
}

/// Values the page shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub quality_label: String,
    pub original_size: Option<String>,
    pub compressed_size: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub error: Option<String>,
}

#[derive(Debug)]
enum State {
    Empty,
    Ready {
        source: SourceImage,
        result: EncodedResult,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug)]
pub struct CompressorSession {
    config: CompressorConfig,
    quality: Quality,
    latest: u64,
    state: State,
}

impl Default for CompressorSession {
    fn default() -> Self {
        Self::new(CompressorConfig::default())
    }
}

impl CompressorSession {
    pub fn new(config: CompressorConfig) -> Self {
        Self {
            quality: config.initial_quality(),
            config,
            latest: 0,
            state: State::Empty,
        }
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn source(&self) -> Option<&SourceImage> {
        match &self.state {
            State::Ready { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&EncodedResult> {
        match &self.state {
            State::Ready { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            State::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Start a load for a file of type `mime`.
    ///
    /// Non-image types are refused here, before a token is issued, so a
    /// rejected selection leaves the session (including any in-flight load)
    /// untouched.
    pub fn begin_load(&mut self, mime: &str) -> Result<RequestToken, DecodeError> {
        if !is_image_mime(mime) {
            log::warn!("rejected non-image selection of type {:?}", mime);
            return Err(DecodeError::NotAnImage {
                mime: mime.to_string(),
            });
        }
        self.latest += 1;
        Ok(RequestToken(self.latest))
    }

    /// True only for the most recently issued token. Nothing is current
    /// before the first `begin_load`.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest != 0 && token.0 == self.latest
    }

    /// Finish a load with the file's bytes. Stale tokens skip decoding.
    pub fn complete_load(&mut self, token: RequestToken, bytes: &[u8]) -> LoadOutcome {
        if !self.is_current(token) {
            log::warn!(
                "discarding load {} (latest is {})",
                token.0,
                self.latest
            );
            return LoadOutcome::Stale;
        }
        let decoded = decode_source(bytes, &self.config);
        self.apply_load(token, decoded)
    }

    /// Finish a load whose decoding happened elsewhere.
    pub fn apply_load(
        &mut self,
        token: RequestToken,
        decoded: Result<SourceImage, DecodeError>,
    ) -> LoadOutcome {
        if !self.is_current(token) {
            log::warn!(
                "discarding load {} (latest is {})",
                token.0,
                self.latest
            );
            return LoadOutcome::Stale;
        }

        match decoded {
            Ok(source) => match encode(&source, self.quality) {
                Ok(result) => {
                    self.state = State::Ready { source, result };
                    LoadOutcome::Loaded
                }
                Err(err) => LoadOutcome::Failed(self.fail(err.into())),
            },
            Err(err) if err.is_rejection() => LoadOutcome::Rejected(err),
            Err(err) => LoadOutcome::Failed(self.fail(err.into())),
        }
    }

    /// Check the type and load in one step.
    pub fn select(&mut self, mime: &str, bytes: &[u8]) -> LoadOutcome {
        match self.begin_load(mime) {
            Ok(token) => self.complete_load(token, bytes),
            Err(err) => LoadOutcome::Rejected(err),
        }
    }

    /// Change the quality, re-encoding the current image if there is one.
    ///
    /// If the re-encode fails the quality and result stay as they were and
    /// the loaded image is kept.
    pub fn set_quality(&mut self, quality: Quality) -> Result<(), EncodeError> {
        let State::Ready { source, result } = &mut self.state else {
            self.quality = quality;
            return Ok(());
        };
        match encode(source, quality) {
            Ok(encoded) => {
                *result = encoded;
                self.quality = quality;
                Ok(())
            }
            Err(err) => {
                log::warn!("re-encode at quality {} failed: {}", quality, err);
                Err(err)
            }
        }
    }

    pub fn display(&self) -> DisplayState {
        let decimals = i32::from(self.config.size_decimals);
        let mut display = DisplayState {
            quality_label: self.quality.label(),
            original_size: None,
            compressed_size: None,
            width: None,
            height: None,
            error: None,
        };

        match &self.state {
            State::Empty => {}
            State::Ready { source, result } => {
                display.original_size = Some(format_bytes(source.original_size, decimals));
                display.compressed_size = Some(format_bytes(result.size(), decimals));
                display.width = Some(source.width);
                display.height = Some(source.height);
            }
            State::Failed { message } => display.error = Some(message.clone()),
        }
        display
    }

    /// The current result as a download named after `timestamp_ms`.
    pub fn download(&self, timestamp_ms: u64) -> Option<Download> {
        self.result()
            .map(|result| Download::new(result, &self.config, timestamp_ms))
    }

    /// The current result as a `data:image/jpeg;base64,` URL.
    pub fn compressed_data_url(&self) -> Option<String> {
        self.result()
            .map(|result| to_data_url(result.mime_type(), result.bytes()))
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        log::warn!("load failed: {}", err);
        self.state = State::Failed {
            message: err.to_string(),
        };
        err
    }
}

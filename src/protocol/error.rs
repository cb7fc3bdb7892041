use serde::{Deserialize, Serialize};

use super::codec;

/// An undecoded engine failure.
///
/// The engine reports failures over two channels: an error value returned in
/// place of a reply, and a raised side channel that carries the same encoded
/// record as an attached payload. Both normalize to the same [`WireError`].
#[derive(Debug, Clone)]
pub enum RawError {
    Returned(Vec<u8>),
    Raised(Vec<u8>),
}

impl RawError {
    pub fn bytes(&self) -> &[u8] {
        match self {
            RawError::Returned(b) | RawError::Raised(b) => b,
        }
    }
}

/// Engine error discriminants. Closed set; unknown values fail to decode and
/// degrade to [`ErrorKind::Fatal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    AlreadyExists,
    DbError,
    NetworkError,
    SyncError,
    Interrupted,
    ProcessAborted,
    Fatal,
}

/// Kind-specific payload attached to a wire error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorContext {
    /// Help text already rendered in the session language by the engine.
    Localized(String),
    /// Machine-usable hint for callers with a retry policy.
    Network { retryable: bool },
}

/// Decoded form of an engine failure, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl WireError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Encode to the framed binary form an engine would return.
    pub fn encode(&self) -> Result<Vec<u8>, crate::error::BridgeError> {
        codec::encode_message(self)
    }

    /// Decode a raw failure from either channel.
    ///
    /// Malformed bytes never propagate as a decode failure: they degrade to a
    /// Fatal-kind error so the caller always sees a structured record.
    pub fn from_raw(raw: &RawError) -> WireError {
        match codec::decode_message::<WireError>(raw.bytes()) {
            Ok(err) => err,
            Err(e) => {
                tracing::warn!("Undecodable engine error ({} bytes): {}", raw.bytes().len(), e);
                WireError::new(
                    ErrorKind::Fatal,
                    format!("Malformed engine error: {}", e),
                )
            }
        }
    }
}

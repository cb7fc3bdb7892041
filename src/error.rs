use thiserror::Error;

use crate::protocol::error::{ErrorContext, ErrorKind, WireError};

/// Failures surfaced by the bridge.
///
/// Engine-reported kinds map 1:1 from the wire discriminant; the last two
/// variants originate in this layer (codec failures, frame cap) and are never
/// confused with engine errors.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        /// Help text rendered by the engine in the session language, if any.
        localized: Option<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DbError(String),

    #[error("Network error: {message}")]
    NetworkError { message: String, retryable: bool },

    #[error("Sync error: {0}")]
    SyncError(String),

    /// An in-flight call was interrupted via the engine's side channel.
    /// Safe to ignore for cooperative-cancellation callers.
    #[error("Operation interrupted")]
    Interrupted,

    #[error("Backend process aborted: {0}")]
    ProcessAborted(String),

    #[error("Fatal backend error: {0}")]
    Fatal(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Message too large")]
    MessageTooLarge,
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, BridgeError::Interrupted)
    }

    /// True when the backend handle is no longer usable and must be
    /// recreated; no in-place recovery is attempted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BridgeError::Fatal(_) | BridgeError::ProcessAborted(_))
    }
}

impl From<WireError> for BridgeError {
    fn from(err: WireError) -> Self {
        let WireError {
            kind,
            message,
            context,
        } = err;
        match kind {
            ErrorKind::InvalidInput => {
                let localized = match context {
                    Some(ErrorContext::Localized(text)) => Some(text),
                    _ => None,
                };
                BridgeError::InvalidInput { message, localized }
            }
            ErrorKind::NotFound => BridgeError::NotFound(message),
            ErrorKind::AlreadyExists => BridgeError::AlreadyExists(message),
            ErrorKind::DbError => BridgeError::DbError(message),
            ErrorKind::NetworkError => {
                let retryable = matches!(context, Some(ErrorContext::Network { retryable: true }));
                BridgeError::NetworkError { message, retryable }
            }
            ErrorKind::SyncError => BridgeError::SyncError(message),
            ErrorKind::Interrupted => BridgeError::Interrupted,
            ErrorKind::ProcessAborted => BridgeError::ProcessAborted(message),
            ErrorKind::Fatal => BridgeError::Fatal(message),
        }
    }
}

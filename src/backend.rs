//! Ownership of the engine session.
//!
//! [`BackendHandle`] is the exclusive owner of one opaque engine session. It
//! is created once at startup, moved (never cloned), and dropping it releases
//! the session. The handle does not serialize concurrent callers: it takes
//! `&mut self`, so at most one call is in flight per handle by construction.

use crate::config::SessionConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::protocol::codec;
use crate::protocol::error::{RawError, WireError};

/// An open engine session. The sole crossing point to the engine: one
/// blocking request/reply primitive with no timeout at this layer.
///
/// Cancellation, if the engine supports it, happens through a side channel
/// the engine recognizes; the in-flight call then fails with an
/// interrupted-kind error rather than returning separately.
pub trait Engine {
    fn invoke(&mut self, request: &[u8]) -> Result<Vec<u8>, RawError>;
}

/// Opens engine sessions. Implementations wrap whatever actually hosts the
/// engine: an in-process library, a child process, a test stub.
pub trait EngineConnector {
    type Session: Engine + 'static;

    /// Open a session. `init` is the framed init message built from the
    /// session configuration.
    fn open(&self, init: &[u8]) -> Result<Self::Session, RawError>;

    /// Build hash of the engine this connector reaches, when it versions
    /// itself. Checked against the config's expected hash at open.
    fn build_hash(&self) -> Option<&str> {
        None
    }
}

/// Owner of a single engine session.
pub struct BackendHandle {
    engine: Box<dyn Engine>,
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendHandle").finish_non_exhaustive()
    }
}

impl BackendHandle {
    /// Open a session with the given configuration.
    ///
    /// Fails if the bridge and engine build hashes disagree, or if the engine
    /// cannot initialize (invalid configuration, resource unavailable).
    pub fn open<C: EngineConnector>(connector: &C, config: &SessionConfig) -> BridgeResult<Self> {
        if let (Some(expected), Some(actual)) = (config.expected_build_hash(), connector.build_hash())
        {
            if expected != actual {
                return Err(BridgeError::Fatal(format!(
                    "Build hash mismatch: bridge {}, engine {}",
                    expected, actual
                )));
            }
        }

        let init_request = config.init_request();
        let init = codec::encode_message(&init_request)?;
        let session = connector
            .open(&init)
            .map_err(|raw| BridgeError::from(WireError::from_raw(&raw)))?;
        tracing::debug!(server = init_request.server, "Engine session opened");

        Ok(Self {
            engine: Box::new(session),
        })
    }

    /// Send request bytes to the engine and block until it replies.
    pub fn invoke(&mut self, request: &[u8]) -> Result<Vec<u8>, RawError> {
        self.engine.invoke(request)
    }

    /// Release the session. Dropping the handle does the same; this exists
    /// for call sites that want the teardown point visible.
    pub fn close(self) {
        tracing::debug!("Engine session closed");
    }
}

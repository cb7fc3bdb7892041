//! Typed dispatch over the backend handle.
//!
//! Every operation here follows the same path: encode, invoke, decode the
//! success value or normalize the failure into a [`BridgeError`]. Errors
//! propagate unmodified; this layer never retries (only the caller knows
//! whether an operation is idempotent).

use crate::backend::{BackendHandle, EngineConnector};
use crate::config::SessionConfig;
use crate::error::BridgeResult;
use crate::i18n::{TranslateArg, TranslateKey, TranslateRequest};
use crate::protocol::call::{CallRequest, MethodId, ServiceId, I18N_SERVICE, TRANSLATE_STRING};
use crate::protocol::codec;
use crate::protocol::db::{DbRequest, Row, SqlValue};
use crate::protocol::error::{RawError, WireError};

/// Command dispatcher over one engine session.
pub struct Bridge {
    handle: BackendHandle,
}

impl Bridge {
    pub fn open<C: EngineConnector>(connector: &C, config: &SessionConfig) -> BridgeResult<Self> {
        Ok(Self {
            handle: BackendHandle::open(connector, config)?,
        })
    }

    pub fn from_handle(handle: BackendHandle) -> Self {
        Self { handle }
    }

    /// Generic call. The payload is pre-encoded by the caller; success bytes
    /// come back unchanged.
    pub fn call(
        &mut self,
        service: ServiceId,
        method: MethodId,
        payload: &[u8],
    ) -> BridgeResult<Vec<u8>> {
        let request =
            codec::encode_message(&CallRequest::new(service, method, payload.to_vec()))?;
        tracing::debug!(service = service.0, method = method.0, "Dispatching call");
        self.handle.invoke(&request).map_err(translate_raw)
    }

    /// Run a query and return its rows. `first_row_only` asks the engine to
    /// stop after one row.
    pub fn db_query(
        &mut self,
        sql: &str,
        args: &[SqlValue],
        first_row_only: bool,
    ) -> BridgeResult<Vec<Row>> {
        self.db_command(&DbRequest::Query {
            sql: sql.to_string(),
            args: args.to_vec(),
            first_row_only,
        })
    }

    /// Execute a statement once per argument row. Result rows are typically
    /// empty.
    pub fn db_execute_many(
        &mut self,
        sql: &str,
        args: &[Vec<SqlValue>],
    ) -> BridgeResult<Vec<Row>> {
        self.db_command(&DbRequest::ExecuteMany {
            sql: sql.to_string(),
            args: args.to_vec(),
        })
    }

    // Transaction state lives in the engine; invalid sequences (commit
    // without begin, nested begin) come back as database errors.

    pub fn db_begin(&mut self) -> BridgeResult<()> {
        self.db_command(&DbRequest::Begin).map(|_| ())
    }

    pub fn db_commit(&mut self) -> BridgeResult<()> {
        self.db_command(&DbRequest::Commit).map(|_| ())
    }

    pub fn db_rollback(&mut self) -> BridgeResult<()> {
        self.db_command(&DbRequest::Rollback).map(|_| ())
    }

    fn db_command(&mut self, request: &DbRequest) -> BridgeResult<Vec<Row>> {
        let bytes = codec::encode_db_request(request)?;
        let reply = self.handle.invoke(&bytes).map_err(translate_raw)?;
        Ok(codec::decode_db_response(&reply)?.into_rows())
    }

    /// Resolve a translation key plus named arguments to a rendered string.
    ///
    /// Accepts raw integer keys and legacy symbolic keys alike through
    /// `Into<TranslateKey>`.
    pub fn translate<K: Into<TranslateKey>>(
        &mut self,
        key: K,
        args: &[(&str, TranslateArg)],
    ) -> BridgeResult<String> {
        let payload = codec::encode_message(&TranslateRequest::new(key.into(), args))?;
        let reply = self.call(I18N_SERVICE, TRANSLATE_STRING, &payload)?;
        codec::decode_message(&reply)
    }

    /// Release the session.
    pub fn close(self) {
        self.handle.close();
    }
}

/// Normalize either failure channel into the structured error path.
fn translate_raw(raw: RawError) -> crate::error::BridgeError {
    WireError::from_raw(&raw).into()
}

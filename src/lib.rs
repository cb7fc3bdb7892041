//! Command/response bridge to a stateful backend engine.
//!
//! The engine lives behind an opaque session handle; this crate marshals
//! typed requests across that boundary and turns failures into one structured
//! error path. Two encodings cross the boundary: framed MessagePack for
//! generic (service, method) calls, and self-describing JSON for the database
//! sub-protocol. See the `protocol` module for the wire details.

pub mod backend;
pub mod bridge;
pub mod config;
pub mod error;
pub mod i18n;
pub mod protocol;

pub use backend::{BackendHandle, Engine, EngineConnector};
pub use bridge::Bridge;
pub use config::{default_langs, set_default_langs, SessionConfig};
pub use error::{BridgeError, BridgeResult};
pub use i18n::{TranslateArg, TranslateKey};
pub use protocol::{DbRequest, RawError, Row, SqlValue, WireError};

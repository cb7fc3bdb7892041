//! Wire protocol for the engine boundary
//!
//! Two encodings cross the boundary:
//! - **Generic calls**: framed MessagePack, `[length: 4 bytes BE][msgpack payload]`,
//!   with the payload schema identified by a (service, method) pair.
//! - **Database commands**: self-describing JSON with a top-level `kind` field,
//!   so bind values round-trip exactly (including null vs absent).

pub mod call;
pub mod codec;
pub mod db;
pub mod error;

pub use call::{CallRequest, MethodId, ServiceId, I18N_SERVICE, TRANSLATE_STRING};
pub use codec::{
    decode_db_response, decode_message, encode_db_request, encode_message, MAX_MESSAGE_SIZE,
};
pub use db::{DbRequest, DbResponse, Row, SqlValue};
pub use error::{ErrorContext, ErrorKind, RawError, WireError};

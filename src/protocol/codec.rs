use serde::{Deserialize, Serialize};

use super::db::{DbRequest, DbResponse};
use crate::error::BridgeError;

pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Encode a message for the binary call protocol.
///
/// Frame format: `[length: 4 bytes BE][msgpack payload]`.
pub fn encode_message<T: Serialize>(msg: &T) -> Result<Vec<u8>, BridgeError> {
    let payload = rmp_serde::to_vec_named(msg)
        .map_err(|e| BridgeError::Protocol(format!("Serialization failed: {}", e)))?;

    if payload.len() > MAX_MESSAGE_SIZE {
        return Err(BridgeError::MessageTooLarge);
    }

    let mut buf = Vec::with_capacity(4 + payload.len());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(&payload);
    Ok(buf)
}

/// Decode a framed binary-protocol message.
pub fn decode_message<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, BridgeError> {
    if data.len() < 4 {
        return Err(BridgeError::Protocol(format!(
            "Message truncated: {} bytes",
            data.len()
        )));
    }

    let declared = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if declared > MAX_MESSAGE_SIZE {
        return Err(BridgeError::MessageTooLarge);
    }
    let payload = &data[4..];
    if declared != payload.len() {
        return Err(BridgeError::Protocol(format!(
            "Frame length mismatch: declared {}, got {}",
            declared,
            payload.len()
        )));
    }

    rmp_serde::from_slice(payload)
        .map_err(|e| BridgeError::Protocol(format!("Deserialization failed: {}", e)))
}

/// Encode a database command as self-describing JSON.
pub fn encode_db_request(req: &DbRequest) -> Result<Vec<u8>, BridgeError> {
    let bytes = serde_json::to_vec(req)
        .map_err(|e| BridgeError::Protocol(format!("Serialization failed: {}", e)))?;
    if bytes.len() > MAX_MESSAGE_SIZE {
        return Err(BridgeError::MessageTooLarge);
    }
    Ok(bytes)
}

/// Decode the JSON reply to a database command.
pub fn decode_db_response(data: &[u8]) -> Result<DbResponse, BridgeError> {
    serde_json::from_slice(data)
        .map_err(|e| BridgeError::Protocol(format!("Deserialization failed: {}", e)))
}

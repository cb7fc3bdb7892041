use serde::{Deserialize, Serialize};

/// Identifies a backend service. The catalog of services is defined by the
/// engine; this layer only needs the pair to be stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub u32);

/// Identifies a method within a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodId(pub u32);

/// Service reserved for string translation.
pub const I18N_SERVICE: ServiceId = ServiceId(5);
/// Method resolving a translation key plus arguments to a rendered string.
pub const TRANSLATE_STRING: MethodId = MethodId(1);

/// Envelope for a generic call. The payload is pre-encoded by the caller;
/// its schema is identified by the (service, method) pair and is opaque here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRequest {
    pub service: u32,
    pub method: u32,
    #[serde(with = "serde_bytes")]
    pub payload: Vec<u8>,
}

impl CallRequest {
    pub fn new(service: ServiceId, method: MethodId, payload: Vec<u8>) -> Self {
        Self {
            service: service.0,
            method: method.0,
            payload,
        }
    }
}

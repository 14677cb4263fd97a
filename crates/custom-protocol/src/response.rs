//! Reply envelope.

use serde::{Deserialize, Serialize};
use crate::error::RpcError;

/// One reply line, carrying either a result payload or an error.
///
/// A request line that could not be decoded is answered with an empty
/// `request_id` and version 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Version the reply was produced under; always 0 for `probe`.
    pub protocol_version: i32,
    /// Correlates the reply with the host's request.
    pub request_id: String,
    /// `true` exactly when `payload` is set.
    pub ok: bool,
    /// Operation result, e.g. `{"state": {...}}` for create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// Why the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// Successful reply.
    pub fn success(protocol_version: i32, request_id: String, payload: serde_json::Value) -> Self {
        Self {
            protocol_version,
            request_id,
            ok: true,
            payload: Some(payload),
            error: None,
        }
    }

    /// Failed reply.
    pub fn error(protocol_version: i32, request_id: String, error: RpcError) -> Self {
        Self {
            protocol_version,
            request_id,
            ok: false,
            payload: None,
            error: Some(error),
        }
    }
}

//! RPC request types.

use serde::{Deserialize, Serialize};

/// RPC request envelope.
///
/// The host writes one request per line on the provider's stdin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version (selected by host after probe).
    /// For probe requests, this MUST be 0.
    pub protocol_version: i32,
    /// Operation name.
    pub op: String,
    /// Caller-chosen request ID for correlation.
    pub request_id: String,
    /// Operation-specific payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl RpcRequest {
    /// Build a request envelope.
    pub fn new(
        protocol_version: i32,
        op: impl Into<String>,
        request_id: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            protocol_version,
            op: op.into(),
            request_id: request_id.into(),
            payload,
        }
    }

    /// Resource type named in the payload, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.payload.get("type_name").and_then(|v| v.as_str())
    }
}

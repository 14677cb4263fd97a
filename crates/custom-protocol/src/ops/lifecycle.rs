//! Create/read/update/delete operation types.

use serde::{Deserialize, Serialize};

/// Create request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub type_name: String,
    pub config: serde_json::Value,
}

/// Read request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadRequest {
    pub type_name: String,
    pub state: serde_json::Value,
}

/// Update request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub type_name: String,
    pub prior_state: serde_json::Value,
    pub config: serde_json::Value,
}

/// Delete request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub type_name: String,
    pub state: serde_json::Value,
}

/// Response payload carrying the new tracked state.
///
/// Shared by create, read, update and import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse {
    pub state: serde_json::Value,
}

/// Delete response payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true on success; nothing exists outside tracked state.
    pub removed: bool,
}

//! Operation handlers for the provider RPC.
//!
//! Each operation has its own handler module that decodes the payload,
//! routes on `type_name` and encodes the resulting state.

pub mod probe;
pub mod schema;
pub mod plan;
pub mod create;
pub mod read;
pub mod update;
pub mod delete;
pub mod import;

use serde::de::DeserializeOwned;
use serde::Serialize;

use custom_protocol::RpcError;

use crate::resources::ResourceType;

/// Decode an operation payload or attribute object.
pub(crate) fn decode<T: DeserializeOwned>(value: &serde_json::Value, what: &str) -> Result<T, RpcError> {
    serde_json::from_value(value.clone())
        .map_err(|e| RpcError::invalid_request(format!("invalid {}: {}", what, e)))
}

/// Encode a response payload.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(value).map_err(|e| {
        RpcError::invalid_request(format!("failed to serialize response: {}", e))
    })
}

/// Resolve the resource type named in a payload.
pub(crate) fn resource_type(type_name: &str) -> Result<ResourceType, RpcError> {
    ResourceType::from_name(type_name).ok_or_else(|| RpcError::unknown_resource_type(type_name))
}

//! Probe operation handler.
//!
//! Reports the supported protocol range and the served resource types.

use custom_protocol::{ops::ProbeResponse, RpcError, PROVIDER_VERSION};

use crate::config::ProviderConfig;
use crate::resources::ResourceType;

/// Handle the probe operation.
pub fn handle(config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let response = ProbeResponse {
        protocol_min: config.protocol_min,
        protocol_max: config.protocol_max,
        provider_version: PROVIDER_VERSION.to_string(),
        resource_types: ResourceType::ALL.iter().map(|ty| ty.name().to_string()).collect(),
    };
    super::encode(&response)
}

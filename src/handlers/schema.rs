//! get_schema operation handler.

use custom_protocol::{ops::GetSchemaResponse, RpcError};

use crate::config::ProviderConfig;
use crate::resources;

/// Handle the get_schema operation.
pub fn handle(config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let response = GetSchemaResponse {
        resources: resources::schemas(config),
    };
    super::encode(&response)
}

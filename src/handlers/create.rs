//! Create operation handler.

use custom_protocol::{ops::{CreateRequest, StateResponse}, RpcError, RpcRequest};

use crate::config::ProviderConfig;
use crate::resources::{integer, timestamp, ResourceType};

/// Handle the create operation.
pub fn handle(request: &RpcRequest, config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let req: CreateRequest = super::decode(&request.payload, "create request")?;

    let state = match super::resource_type(&req.type_name)? {
        ResourceType::SequentialInteger => {
            let desired: integer::IntegerConfig = super::decode(&req.config, "config")?;
            super::encode(&integer::create(&desired)?)?
        }
        ResourceType::PinnedTimestamp => {
            let desired: timestamp::TimestampConfig = super::decode(&req.config, "config")?;
            super::encode(&timestamp::create(&desired, &config.timestamp)?)?
        }
    };

    super::encode(&StateResponse { state })
}

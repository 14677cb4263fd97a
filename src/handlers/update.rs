//! Update operation handler.
//!
//! Only the sequential integer updates in place; every configurable
//! timestamp attribute is force-new.

use custom_protocol::{ops::{names, StateResponse, UpdateRequest}, RpcError, RpcRequest};

use crate::config::ProviderConfig;
use crate::resources::{integer, ResourceType};

/// Handle the update operation.
pub fn handle(request: &RpcRequest, _config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let req: UpdateRequest = super::decode(&request.payload, "update request")?;

    let state = match super::resource_type(&req.type_name)? {
        ResourceType::SequentialInteger => {
            let prior: integer::IntegerState = super::decode(&req.prior_state, "prior_state")?;
            let desired: integer::IntegerConfig = super::decode(&req.config, "config")?;
            super::encode(&integer::update(&prior, &desired)?)?
        }
        ResourceType::PinnedTimestamp => {
            return Err(RpcError::unsupported_operation(&req.type_name, names::UPDATE));
        }
    };

    super::encode(&StateResponse { state })
}

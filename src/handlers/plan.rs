//! Plan operation handler.
//!
//! Runs the sequential integer diff hook or the timestamp force-new check
//! against the prior state.

use custom_protocol::{ops::PlanRequest, RpcError, RpcRequest};

use crate::config::ProviderConfig;
use crate::resources::{integer, timestamp, ResourceType};

/// Handle the plan operation.
pub fn handle(request: &RpcRequest, config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let req: PlanRequest = super::decode(&request.payload, "plan request")?;

    let response = match super::resource_type(&req.type_name)? {
        ResourceType::SequentialInteger => {
            let desired: integer::IntegerConfig = super::decode(&req.config, "config")?;
            let prior: Option<integer::IntegerState> = match &req.prior_state {
                Some(state) if !state.is_null() => Some(super::decode(state, "prior_state")?),
                _ => None,
            };
            integer::plan(prior.as_ref(), &desired)
        }
        ResourceType::PinnedTimestamp => {
            let desired: timestamp::TimestampConfig = super::decode(&req.config, "config")?;
            let prior: Option<timestamp::TimestampState> = match &req.prior_state {
                Some(state) if !state.is_null() => Some(super::decode(state, "prior_state")?),
                _ => None,
            };
            timestamp::plan(prior.as_ref(), &desired, &config.timestamp)
        }
    };

    super::encode(&response)
}

//! Read operation handler.

use custom_protocol::{ops::{ReadRequest, StateResponse}, RpcError, RpcRequest};

use crate::config::ProviderConfig;
use crate::resources::{integer, timestamp, ResourceType};

/// Handle the read operation.
pub fn handle(request: &RpcRequest, _config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let req: ReadRequest = super::decode(&request.payload, "read request")?;

    let state = match super::resource_type(&req.type_name)? {
        ResourceType::SequentialInteger => {
            let tracked: integer::IntegerState = super::decode(&req.state, "state")?;
            super::encode(&integer::read(&tracked)?)?
        }
        ResourceType::PinnedTimestamp => {
            let tracked: timestamp::TimestampState = super::decode(&req.state, "state")?;
            super::encode(&timestamp::read(&tracked))?
        }
    };

    super::encode(&StateResponse { state })
}

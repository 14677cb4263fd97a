//! Import operation handler.
//!
//! Rebuilds full state from a composite import string.

use custom_protocol::{ops::{ImportRequest, StateResponse}, RpcError, RpcRequest};

use crate::config::ProviderConfig;
use crate::resources::{integer, timestamp, ResourceType};

/// Handle the import operation.
pub fn handle(request: &RpcRequest, _config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let req: ImportRequest = super::decode(&request.payload, "import request")?;
    let state = import_state(&req.type_name, &req.id)?;
    super::encode(&StateResponse { state })
}

/// Import `id` as a resource of `type_name`, returning the state object.
pub fn import_state(type_name: &str, id: &str) -> Result<serde_json::Value, RpcError> {
    match super::resource_type(type_name)? {
        ResourceType::SequentialInteger => super::encode(&integer::import(id)?),
        ResourceType::PinnedTimestamp => super::encode(&timestamp::import(id)?),
    }
}

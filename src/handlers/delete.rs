//! Delete operation handler.
//!
//! Neither resource exists outside tracked state, so deleting only
//! acknowledges removal.

use custom_protocol::{ops::{DeleteRequest, DeleteResponse}, RpcError, RpcRequest};
use tracing::debug;

use crate::config::ProviderConfig;

/// Handle the delete operation.
pub fn handle(request: &RpcRequest, _config: &ProviderConfig) -> Result<serde_json::Value, RpcError> {
    let req: DeleteRequest = super::decode(&request.payload, "delete request")?;
    let resource_type = super::resource_type(&req.type_name)?;

    debug!(type_name = resource_type.name(), id = ?req.state.get("id"), "removing from state");

    super::encode(&DeleteResponse { removed: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::make_request;
    use custom_protocol::ErrorCode;

    #[test]
    fn test_delete_acknowledges() {
        let request = make_request("delete", serde_json::json!({
            "type_name": "sequential_integer",
            "state": { "id": "2", "min": 1, "max": 3, "value": 2 }
        }));
        let result = handle(&request, &ProviderConfig::default()).unwrap();
        assert_eq!(result["removed"], true);
    }

    #[test]
    fn test_delete_unknown_type() {
        let request = make_request("delete", serde_json::json!({
            "type_name": "nope",
            "state": {}
        }));
        let err = handle(&request, &ProviderConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownResourceType);
    }
}

//! Sequential Integer Lifecycle Tests
//!
//! Drives `sequential_integer` through the in-process RPC handler the way
//! the host would: create, update, read, import, delete.

use custom_provider::{ProviderConfig, RpcHandler};
use custom_protocol::{ErrorCode, RpcRequest, RpcResponse};
use serde_json::{json, Value};

/// Helper to create an RPC request
fn make_request(op: &str, payload: Value) -> RpcRequest {
    RpcRequest::new(1, op, format!("test-{}", op), payload)
}

fn call(handler: &RpcHandler, op: &str, payload: Value) -> RpcResponse {
    handler.handle_request(&make_request(op, payload))
}

fn state_of(response: RpcResponse) -> Value {
    assert!(response.ok, "expected success, got {:?}", response.error);
    response.payload.expect("success has payload")["state"].clone()
}

fn create(handler: &RpcHandler, min: i64, max: i64) -> Value {
    state_of(call(handler, "create", json!({
        "type_name": "sequential_integer",
        "config": { "min": min, "max": max }
    })))
}

fn update(handler: &RpcHandler, prior: &Value, min: i64, max: i64) -> Value {
    state_of(call(handler, "update", json!({
        "type_name": "sequential_integer",
        "prior_state": prior,
        "config": { "min": min, "max": max }
    })))
}

// =============================================================================
// Create / update cycle
// =============================================================================

#[test]
fn test_create_then_update_wraps() {
    let handler = RpcHandler::new(ProviderConfig::default());

    let mut state = create(&handler, 1, 3);
    assert_eq!(state["value"], 1);
    assert_eq!(state["id"], "1");

    let mut values = Vec::new();
    for _ in 0..3 {
        state = update(&handler, &state, 1, 3);
        values.push(state["value"].as_i64().unwrap());
    }
    assert_eq!(values, vec![2, 3, 1], "third update wraps back to min");
    assert_eq!(state["id"], "1");
}

#[test]
fn test_cycle_period_is_range_size() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let (min, max) = (5, 9);

    let start = create(&handler, min, max);
    let mut state = start.clone();
    for _ in 0..(max - min + 1) {
        state = update(&handler, &state, min, max);
    }
    assert_eq!(state["value"], start["value"]);
}

#[test]
fn test_invalid_bounds_fail_every_operation() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let valid = create(&handler, 1, 3);

    for (min, max) in [(0, 3), (-1, 3), (3, 3), (4, 2)] {
        let created = call(&handler, "create", json!({
            "type_name": "sequential_integer",
            "config": { "min": min, "max": max }
        }));
        assert_eq!(created.error.unwrap().code, ErrorCode::ValidationFailed);

        let updated = call(&handler, "update", json!({
            "type_name": "sequential_integer",
            "prior_state": valid,
            "config": { "min": min, "max": max }
        }));
        assert_eq!(updated.error.unwrap().code, ErrorCode::ValidationFailed);

        let read = call(&handler, "read", json!({
            "type_name": "sequential_integer",
            "state": { "id": "1", "min": min, "max": max, "value": 1 }
        }));
        assert_eq!(read.error.unwrap().code, ErrorCode::ValidationFailed);

        let imported = call(&handler, "import", json!({
            "type_name": "sequential_integer",
            "id": format!("{},{},{}", max, min, max)
        }));
        assert_eq!(imported.error.unwrap().code, ErrorCode::ValidationFailed);
    }
}

// =============================================================================
// Read self-healing
// =============================================================================

#[test]
fn test_read_resets_drifted_value() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let response = call(&handler, "read", json!({
        "type_name": "sequential_integer",
        "state": { "id": "12", "min": 1, "max": 3, "value": 12, "keepers": {} }
    }));

    assert!(response.ok, "read must not fail on drift");
    assert_eq!(state_of(response)["value"], 1);
}

// =============================================================================
// Import
// =============================================================================

#[test]
fn test_import_basic() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let state = state_of(call(&handler, "import", json!({
        "type_name": "sequential_integer",
        "id": "3,1,3"
    })));

    assert_eq!(state["value"], 3);
    assert_eq!(state["min"], 1);
    assert_eq!(state["max"], 3);
    assert_eq!(state["id"], "3");
}

#[test]
fn test_import_big_values_survive_the_wire() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let input = "{\"protocol_version\":1,\"op\":\"import\",\"request_id\":\"big\",\"payload\":\
        {\"type_name\":\"sequential_integer\",\"id\":\"7227701560655103598,7227701560655103597,7227701560655103598\"}}\n";

    let mut output = Vec::new();
    handler
        .run_with_io(&mut std::io::Cursor::new(input), &mut output)
        .unwrap();

    let response: RpcResponse = serde_json::from_slice(&output).unwrap();
    let state = state_of(response);
    assert_eq!(state["value"].as_i64(), Some(7227701560655103598));
    assert_eq!(state["min"].as_i64(), Some(7227701560655103597));
    assert_eq!(state["max"].as_i64(), Some(7227701560655103598));
}

#[test]
fn test_import_then_update_continues_sequence() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let imported = state_of(call(&handler, "import", json!({
        "type_name": "sequential_integer",
        "id": "2,1,3"
    })));

    let next = update(&handler, &imported, 1, 3);
    assert_eq!(next["value"], 3);
}

#[test]
fn test_import_malformed() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let response = call(&handler, "import", json!({
        "type_name": "sequential_integer",
        "id": "3,one,3"
    }));

    let error = response.error.unwrap();
    assert_eq!(error.code, ErrorCode::ParseFailed);
    assert_eq!(error.data.unwrap()["field"], "min");
}

// =============================================================================
// Plan and delete
// =============================================================================

#[test]
fn test_plan_keepers_change_recomputes_value() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let state = create(&handler, 1, 3);

    let response = call(&handler, "plan", json!({
        "type_name": "sequential_integer",
        "prior_state": state,
        "config": { "min": 1, "max": 3, "keepers": { "image": "v2" } }
    }));

    let payload = response.payload.unwrap();
    assert_eq!(payload["unknown_attributes"], json!(["value", "id"]));
    assert_eq!(payload["requires_replace"], json!([]));
}

#[test]
fn test_delete_is_state_only() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let state = create(&handler, 1, 3);

    let response = call(&handler, "delete", json!({
        "type_name": "sequential_integer",
        "state": state
    }));
    assert!(response.ok);
    assert_eq!(response.payload.unwrap()["removed"], true);
}

#[test]
fn test_null_keepers_accepted() {
    let handler = RpcHandler::new(ProviderConfig::default());
    let state = state_of(call(&handler, "create", json!({
        "type_name": "sequential_integer",
        "config": { "min": 1, "max": 3, "keepers": null }
    })));
    assert_eq!(state["value"], 1);

    let planned = call(&handler, "plan", json!({
        "type_name": "sequential_integer",
        "prior_state": state,
        "config": { "min": 1, "max": 3, "keepers": null }
    }));
    assert!(planned.ok);
    assert_eq!(planned.payload.unwrap()["unknown_attributes"], json!([]));
}

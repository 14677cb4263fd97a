//! Plan operation types.
//!
//! The host asks the provider how a configuration change affects existing
//! state before it decides between update and replacement.

use serde::{Deserialize, Serialize};

/// Plan request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Resource type name.
    pub type_name: String,
    /// Current tracked state, absent when the resource does not exist yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_state: Option<serde_json::Value>,
    /// Desired configuration.
    pub config: serde_json::Value,
}

/// Plan response payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Expected state after apply; unknown attributes carry their prior value
    /// or null.
    pub planned_state: serde_json::Value,
    /// Computed attributes whose value is only known after apply.
    #[serde(default)]
    pub unknown_attributes: Vec<String>,
    /// Force-new attributes whose change requires replacement.
    #[serde(default)]
    pub requires_replace: Vec<String>,
}

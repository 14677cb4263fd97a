//! Schema operation types.
//!
//! Describes the attributes of each resource type so the host can validate
//! configuration and compute diffs.

use serde::{Deserialize, Serialize};

/// Attribute value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// 64-bit signed integer.
    Int,
    /// UTF-8 string.
    String,
    /// Map of string keys to string values.
    MapOfString,
}

/// A single named attribute of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: AttributeType,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    /// A change to this attribute replaces the resource instead of updating it.
    #[serde(default)]
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// Schema of one resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    pub type_name: String,
    pub description: String,
    pub attributes: Vec<Attribute>,
    /// Whether the resource accepts in-place update.
    pub updatable: bool,
}

/// get_schema response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSchemaResponse {
    pub resources: Vec<ResourceSchema>,
}

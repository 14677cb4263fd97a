//! Probe operation types.
//!
//! Version negotiation between host and provider.

use serde::{Deserialize, Serialize};

/// Probe response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// Lowest protocol version the provider accepts.
    pub protocol_min: i32,
    /// Highest protocol version the provider accepts.
    pub protocol_max: i32,
    /// Provider build version.
    pub provider_version: String,
    /// Resource type names served by the provider.
    pub resource_types: Vec<String>,
}

//! Custom Terraform provider - sequential integers and pinned timestamps
//!
//! This crate implements two stateful resources that help resources using
//! `create_before_destroy` avoid naming collisions: a bounded, wrapping
//! sequential integer and a timestamp pinned at creation. The host drives
//! every lifecycle call over a line-delimited JSON RPC on stdio and owns all
//! persistence; each operation here is a pure transformation from tracked
//! state and configuration to new state.

pub mod config;
pub mod error;
pub mod handlers;
pub mod resources;
pub mod rpc;
pub mod schema;

pub use config::{ConfigError, ProviderConfig, TimestampDefaults, Timezone};
pub use error::ProviderError;
pub use resources::integer::{DiffDecision, IntegerConfig, IntegerState};
pub use resources::timestamp::{TimestampConfig, TimestampState};
pub use resources::ResourceType;
pub use rpc::RpcHandler;

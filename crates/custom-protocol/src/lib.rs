//! Wire types shared by the provider and its host.
//!
//! Each line on the provider's stdin is one [`RpcRequest`]; each line it
//! writes to stdout is the matching [`RpcResponse`]. Resource state travels
//! as plain JSON objects inside the payloads in [`ops`].

pub mod error;
pub mod request;
pub mod response;
pub mod ops;

pub use error::{ErrorCode, RpcError};
pub use request::RpcRequest;
pub use response::RpcResponse;

/// Version the host sends with `probe`, before any version is agreed.
pub const PROTOCOL_VERSION_PROBE: i32 = 0;

/// Oldest lifecycle protocol version understood by default.
pub const PROTOCOL_MIN: i32 = 1;

/// Newest lifecycle protocol version understood by default.
pub const PROTOCOL_MAX: i32 = 1;

/// Reported to the host in the probe result.
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

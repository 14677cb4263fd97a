//! Operation-specific types.

pub mod probe;
pub mod schema;
pub mod plan;
pub mod lifecycle;
pub mod import;

pub use probe::ProbeResponse;
pub use schema::{Attribute, AttributeType, GetSchemaResponse, ResourceSchema};
pub use plan::{PlanRequest, PlanResponse};
pub use lifecycle::{
    CreateRequest, DeleteRequest, DeleteResponse, ReadRequest, StateResponse, UpdateRequest,
};
pub use import::ImportRequest;

/// Known operation names.
pub mod names {
    pub const PROBE: &str = "probe";
    pub const GET_SCHEMA: &str = "get_schema";
    pub const PLAN: &str = "plan";
    pub const CREATE: &str = "create";
    pub const READ: &str = "read";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const IMPORT: &str = "import";
}

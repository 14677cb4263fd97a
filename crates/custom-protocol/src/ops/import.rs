//! Import operation types.

use serde::{Deserialize, Serialize};

/// Import request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    pub type_name: String,
    /// Composite import string, e.g. `"3,1,3"` or `"2024-01-01 10:00:00"`.
    pub id: String,
}

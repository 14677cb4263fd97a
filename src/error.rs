//! Provider error taxonomy.
//!
//! Bound violations and parse failures are terminal for the operation that
//! raised them; the host surfaces them as apply failures. The only silent
//! correction lives in the sequential integer read path and never produces
//! an error.

use std::num::ParseIntError;

use custom_protocol::{ErrorCode, RpcError};
use thiserror::Error;

/// Result alias for resource operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors raised by resource lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Minimum value cannot be less than or equal to Zero")]
    MinNotPositive { min: i64 },

    #[error("Maximum value needs to be greater than minimum value")]
    MaxNotGreaterThanMin { min: i64, max: i64 },

    #[error("Value must be between Min and Max (inclusive)")]
    ValueOutOfRange { value: i64, min: i64, max: i64 },

    #[error("Cannot read resource id [{id}]: {source}")]
    InvalidId { id: String, source: ParseIntError },

    #[error("Invalid import usage: expecting {expected}")]
    InvalidImportFormat { expected: &'static str, raw: String },

    #[error("Error parsing \"{field}\": {source}")]
    InvalidImportField {
        field: &'static str,
        raw: String,
        source: ParseIntError,
    },

    #[error("invalid time format {format:?}: unrecognized specifier")]
    InvalidTimeFormat { format: String },
}

impl ProviderError {
    /// Wire error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MinNotPositive { .. }
            | Self::MaxNotGreaterThanMin { .. }
            | Self::ValueOutOfRange { .. }
            | Self::InvalidTimeFormat { .. } => ErrorCode::ValidationFailed,
            Self::InvalidId { .. }
            | Self::InvalidImportFormat { .. }
            | Self::InvalidImportField { .. } => ErrorCode::ParseFailed,
        }
    }

    /// Machine-readable details for the wire error.
    fn data(&self) -> serde_json::Value {
        match self {
            Self::MinNotPositive { min } => serde_json::json!({ "field": "min", "min": min }),
            Self::MaxNotGreaterThanMin { min, max } => {
                serde_json::json!({ "field": "max", "min": min, "max": max })
            }
            Self::ValueOutOfRange { value, min, max } => {
                serde_json::json!({ "field": "value", "value": value, "min": min, "max": max })
            }
            Self::InvalidId { id, .. } => serde_json::json!({ "field": "id", "raw": id }),
            Self::InvalidImportFormat { expected, raw } => {
                serde_json::json!({ "field": "id", "raw": raw, "expected": expected })
            }
            Self::InvalidImportField { field, raw, .. } => {
                serde_json::json!({ "field": field, "raw": raw })
            }
            Self::InvalidTimeFormat { format } => {
                serde_json::json!({ "field": "format", "raw": format })
            }
        }
    }
}

impl From<ProviderError> for RpcError {
    fn from(err: ProviderError) -> Self {
        RpcError::with_data(err.code(), err.to_string(), err.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_errors_map_to_validation() {
        let err: RpcError = ProviderError::MinNotPositive { min: 0 }.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Minimum value cannot be less than or equal to Zero");
        assert_eq!(err.data.unwrap()["field"], "min");
    }

    #[test]
    fn test_parse_errors_map_to_parse_failed() {
        let source = "x1".parse::<i64>().unwrap_err();
        let err = ProviderError::InvalidId { id: "x1".to_string(), source };
        assert_eq!(err.code(), ErrorCode::ParseFailed);
        assert!(err.to_string().starts_with("Cannot read resource id [x1]: "));
    }

    #[test]
    fn test_import_field_message_names_field() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = ProviderError::InvalidImportField { field: "max", raw: "abc".to_string(), source };
        assert!(err.to_string().starts_with("Error parsing \"max\": "));
        let rpc: RpcError = err.into();
        assert_eq!(rpc.data.unwrap()["raw"], "abc");
    }
}

//! Sequential integer resource.
//!
//! Hands out values from the inclusive range `[min, max]`, starting at `min`
//! and advancing by one on every update. Past `max` the sequence wraps back
//! to `min`, so the range behaves as a ring of `max - min + 1` slots. Used
//! alongside `create_before_destroy` to give the replacement resource a name
//! that differs from the one it replaces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use custom_protocol::ops::PlanResponse;

use crate::error::{ProviderError, Result};
use crate::schema::{self, AttributeType, ResourceSchema};

/// Resource type name.
pub const TYPE_NAME: &str = "sequential_integer";

const IMPORT_USAGE: &str = "{value},{min},{max}";

/// User-supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerConfig {
    pub min: i64,
    pub max: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub keepers: BTreeMap<String, String>,
}

/// Tracked state of one sequential integer.
///
/// `id` is the string form of `value` as of the last create, update or
/// import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerState {
    pub id: String,
    pub min: i64,
    pub max: i64,
    /// Recomputed by read from `id`.
    #[serde(default)]
    pub value: i64,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub keepers: BTreeMap<String, String>,
}

/// Outcome of the custom diff hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffDecision {
    /// `value` must be recomputed during apply.
    pub recompute_value: bool,
}

/// Schema of `sequential_integer`.
pub fn schema() -> ResourceSchema {
    ResourceSchema {
        type_name: TYPE_NAME.to_string(),
        description: "The resource `sequential_integer` generates sequential values from a given \
            range, described by the `min` and `max` attributes of a given resource.\n\n\
            This resource can be used in conjunction with resources that have the \
            `create_before_destroy` lifecycle flag set, to avoid conflicts with unique names \
            during the brief period where both the old and new resources exist concurrently."
            .to_string(),
        attributes: vec![
            schema::optional(
                "keepers",
                AttributeType::MapOfString,
                "Arbitrary map of values that, when changed, will trigger recomputation of `value`.",
            ),
            schema::required(
                "min",
                AttributeType::Int,
                "The minimum inclusive value of the range. Must be greater than Zero.",
            ),
            schema::required(
                "max",
                AttributeType::Int,
                "The maximum inclusive value of the range. If generation exceeds Max, it will reset to Min.",
            ),
            schema::computed("value", AttributeType::Int, "The sequential integer result."),
            schema::computed("id", AttributeType::String, "String form of `value`."),
        ],
        updatable: true,
    }
}

/// Check `min > 0` and `max > min`.
pub fn validate_bounds(min: i64, max: i64) -> Result<()> {
    if min <= 0 {
        return Err(ProviderError::MinNotPositive { min });
    }
    if max <= min {
        return Err(ProviderError::MaxNotGreaterThanMin { min, max });
    }
    Ok(())
}

/// Start a new sequence at `min`.
pub fn create(config: &IntegerConfig) -> Result<IntegerState> {
    validate_bounds(config.min, config.max)?;

    let value = config.min;
    Ok(IntegerState {
        id: value.to_string(),
        min: config.min,
        max: config.max,
        value,
        keepers: config.keepers.clone(),
    })
}

/// Refresh `value` from the tracked identifier.
///
/// An identifier outside `[min, max]` is reset to `min` instead of failing;
/// the identifier itself is left as tracked until the next update.
pub fn read(state: &IntegerState) -> Result<IntegerState> {
    validate_bounds(state.min, state.max)?;

    let mut value = parse_id(&state.id)?;
    if value < state.min || value > state.max {
        info!(
            id = %state.id,
            min = state.min,
            max = state.max,
            "tracked value outside range, resetting to min"
        );
        value = state.min;
    }

    Ok(IntegerState {
        value,
        ..state.clone()
    })
}

/// Advance the sequence by one step, wrapping to `min` past `max`.
///
/// Bounds and keepers come from the new configuration; the starting point is
/// the tracked identifier.
pub fn update(prior: &IntegerState, config: &IntegerConfig) -> Result<IntegerState> {
    validate_bounds(config.min, config.max)?;

    let current = parse_id(&prior.id)?;
    let value = match current.checked_add(1) {
        Some(next) if next >= config.min && next <= config.max => next,
        _ => config.min,
    };

    Ok(IntegerState {
        id: value.to_string(),
        min: config.min,
        max: config.max,
        value,
        keepers: config.keepers.clone(),
    })
}

/// Adopt an existing sequence from `"{value},{min},{max}"`.
pub fn import(id: &str) -> Result<IntegerState> {
    let parts: Vec<&str> = id.split(',').collect();
    let [raw_value, raw_min, raw_max] = parts.as_slice() else {
        return Err(ProviderError::InvalidImportFormat {
            expected: IMPORT_USAGE,
            raw: id.to_string(),
        });
    };

    let min = parse_import_field("min", raw_min)?;
    if min <= 0 {
        return Err(ProviderError::MinNotPositive { min });
    }

    let max = parse_import_field("max", raw_max)?;
    if max <= min {
        return Err(ProviderError::MaxNotGreaterThanMin { min, max });
    }

    let value = parse_import_field("value", raw_value)?;
    if value < min || value > max {
        return Err(ProviderError::ValueOutOfRange { value, min, max });
    }

    Ok(IntegerState {
        id: value.to_string(),
        min,
        max,
        value,
        keepers: BTreeMap::new(),
    })
}

/// Decide whether a configuration change invalidates the tracked value.
///
/// A bound change recomputes only when the current value no longer fits the
/// new range. Any keepers change recomputes.
pub fn customize_diff(prior: &IntegerState, config: &IntegerConfig) -> DiffDecision {
    let bounds_changed = prior.min != config.min || prior.max != config.max;
    let out_of_range = config.min > prior.value || config.max < prior.value;

    DiffDecision {
        recompute_value: (bounds_changed && out_of_range) || prior.keepers != config.keepers,
    }
}

/// Plan a create (no prior state) or an update.
pub fn plan(prior: Option<&IntegerState>, config: &IntegerConfig) -> PlanResponse {
    let Some(prior) = prior else {
        return PlanResponse {
            planned_state: serde_json::json!({
                "id": Value::Null,
                "min": config.min,
                "max": config.max,
                "value": Value::Null,
                "keepers": config.keepers,
            }),
            unknown_attributes: schema::computed_names(&schema()),
            requires_replace: Vec::new(),
        };
    };

    let decision = customize_diff(prior, config);
    let (value, id, unknown_attributes) = if decision.recompute_value {
        (Value::Null, Value::Null, vec!["value".to_string(), "id".to_string()])
    } else {
        (Value::from(prior.value), Value::from(prior.id.clone()), Vec::new())
    };

    PlanResponse {
        planned_state: serde_json::json!({
            "id": id,
            "min": config.min,
            "max": config.max,
            "value": value,
            "keepers": config.keepers,
        }),
        unknown_attributes,
        requires_replace: Vec::new(),
    }
}

fn parse_id(id: &str) -> Result<i64> {
    id.parse::<i64>().map_err(|source| ProviderError::InvalidId {
        id: id.to_string(),
        source,
    })
}

fn parse_import_field(field: &'static str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|source| ProviderError::InvalidImportField {
        field,
        raw: raw.to_string(),
        source,
    })
}

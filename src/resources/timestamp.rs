//! Pinned timestamp resource.
//!
//! Captures the wall-clock time once, at creation, and keeps it until the
//! host replaces the resource. `triggers` and `format` are force-new, so any
//! change to them is planned as a replacement rather than an update.

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use custom_protocol::ops::PlanResponse;

use crate::config::{TimestampDefaults, Timezone};
use crate::error::{ProviderError, Result};
use crate::schema::{self, AttributeExt, AttributeType, ResourceSchema};

/// Resource type name.
pub const TYPE_NAME: &str = "pinned_timestamp";

const IMPORT_USAGE: &str = "{timestamp} or {timestamp},{format}";

/// User-supplied configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampConfig {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub triggers: BTreeMap<String, String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Tracked state of one pinned timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampState {
    /// Same as `timestamp`.
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub triggers: BTreeMap<String, String>,
    /// `None` only after an import that named no format.
    #[serde(default)]
    pub format: Option<String>,
    pub timestamp: String,
}

/// Schema of `pinned_timestamp`.
pub fn schema(defaults: &TimestampDefaults) -> ResourceSchema {
    ResourceSchema {
        type_name: TYPE_NAME.to_string(),
        description: "The resource `pinned_timestamp` generates a timestamp when one of the \
            trigger values changes.\n\n\
            This resource can be used in conjunction with resources that have the \
            `create_before_destroy` lifecycle flag set, to avoid conflicts with unique names \
            during the brief period where both the old and new resources exist concurrently."
            .to_string(),
        attributes: vec![
            schema::optional(
                "triggers",
                AttributeType::MapOfString,
                "Arbitrary map of values that, when changed, will trigger recreation of resource.",
            )
            .force_new(),
            schema::optional(
                "format",
                AttributeType::String,
                "A custom date/time format in strftime syntax, e.g. `%Y%m%d%H%M%S`.",
            )
            .force_new()
            .with_default(Value::from(defaults.default_format.clone())),
            schema::computed("timestamp", AttributeType::String, "The generated timestamp."),
            schema::computed("id", AttributeType::String, "Same as `timestamp`."),
        ],
        updatable: false,
    }
}

/// Render `now` with a strftime pattern.
///
/// Patterns with unrecognized specifiers are rejected up front; chrono would
/// otherwise fail while writing the output.
pub fn render<Tz>(format: &str, now: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ProviderError::InvalidTimeFormat {
            format: format.to_string(),
        });
    }
    Ok(now.format_with_items(items.into_iter()).to_string())
}

/// Capture the current time on the configured clock.
pub fn create(config: &TimestampConfig, defaults: &TimestampDefaults) -> Result<TimestampState> {
    match defaults.timezone {
        Timezone::Local => create_at(config, defaults, &Local::now()),
        Timezone::Utc => create_at(config, defaults, &Utc::now()),
    }
}

/// Pin `now` as the timestamp.
pub fn create_at<Tz>(
    config: &TimestampConfig,
    defaults: &TimestampDefaults,
    now: &DateTime<Tz>,
) -> Result<TimestampState>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let format = resolved_format(config, defaults);
    let timestamp = render(&format, now)?;

    Ok(TimestampState {
        id: timestamp.clone(),
        triggers: config.triggers.clone(),
        format: Some(format),
        timestamp,
    })
}

/// The timestamp never drifts, so reading returns the tracked state.
pub fn read(state: &TimestampState) -> TimestampState {
    state.clone()
}

/// Adopt an existing timestamp from `"{timestamp}"` or
/// `"{timestamp},{format}"`.
///
/// Neither part is checked against a pattern.
pub fn import(id: &str) -> Result<TimestampState> {
    let parts: Vec<&str> = id.split(',').collect();
    let (timestamp, format) = match parts.as_slice() {
        [timestamp] => (*timestamp, None),
        [timestamp, format] => (*timestamp, Some(format.to_string())),
        _ => {
            return Err(ProviderError::InvalidImportFormat {
                expected: IMPORT_USAGE,
                raw: id.to_string(),
            })
        }
    };

    Ok(TimestampState {
        id: timestamp.to_string(),
        triggers: BTreeMap::new(),
        format,
        timestamp: timestamp.to_string(),
    })
}

/// Plan a create (no prior state) or report which force-new attributes
/// changed.
pub fn plan(
    prior: Option<&TimestampState>,
    config: &TimestampConfig,
    defaults: &TimestampDefaults,
) -> PlanResponse {
    let schema = schema(defaults);
    let fresh = || {
        serde_json::json!({
            "id": Value::Null,
            "triggers": config.triggers,
            "format": resolved_format(config, defaults),
            "timestamp": Value::Null,
        })
    };

    let Some(prior) = prior else {
        return PlanResponse {
            planned_state: fresh(),
            unknown_attributes: schema::computed_names(&schema),
            requires_replace: Vec::new(),
        };
    };

    let mut desired = serde_json::json!({ "triggers": config.triggers, "format": config.format });
    schema::apply_defaults(&schema, &mut desired);
    let prior_value = serde_json::json!({ "triggers": prior.triggers, "format": prior.format });

    let requires_replace = schema::replace_paths(&schema, &prior_value, &desired);
    if requires_replace.is_empty() {
        return PlanResponse {
            planned_state: serde_json::json!(prior),
            unknown_attributes: Vec::new(),
            requires_replace,
        };
    }

    PlanResponse {
        planned_state: fresh(),
        unknown_attributes: schema::computed_names(&schema),
        requires_replace,
    }
}

fn resolved_format(config: &TimestampConfig, defaults: &TimestampDefaults) -> String {
    config
        .format
        .clone()
        .unwrap_or_else(|| defaults.default_format.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap()
    }

    fn with_format(format: &str) -> TimestampConfig {
        TimestampConfig {
            triggers: BTreeMap::new(),
            format: Some(format.to_string()),
        }
    }

    #[test]
    fn test_create_uses_default_format() {
        let defaults = TimestampDefaults::default();
        let created = create_at(&TimestampConfig::default(), &defaults, &fixed_time()).unwrap();
        assert_eq!(created.timestamp, "2024-03-09 07:05:02");
        assert_eq!(created.id, created.timestamp);
        assert_eq!(created.format.as_deref(), Some("%Y-%m-%d %H:%M:%S"));
    }

    #[test]
    fn test_create_custom_format_and_offset() {
        let defaults = TimestampDefaults::default();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = fixed_time().with_timezone(&offset);
        let created = create_at(&with_format("%Y%m%d%H%M%S %z"), &defaults, &now).unwrap();
        assert_eq!(created.timestamp, "20240309090502 +0200");
    }

    #[test]
    fn test_create_keeps_triggers() {
        let defaults = TimestampDefaults::default();
        let mut config = TimestampConfig::default();
        config.triggers.insert("ami".to_string(), "ami-123".to_string());
        let created = create_at(&config, &defaults, &fixed_time()).unwrap();
        assert_eq!(created.triggers["ami"], "ami-123");
    }

    #[test]
    fn test_create_rejects_invalid_format() {
        let defaults = TimestampDefaults::default();
        let err = create_at(&with_format("%Y-%!"), &defaults, &fixed_time()).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_create_on_live_clock() {
        let defaults = TimestampDefaults {
            default_format: "%Y".to_string(),
            timezone: Timezone::Utc,
        };
        let before = Utc::now().format("%Y").to_string();
        let created = create(&TimestampConfig::default(), &defaults).unwrap();
        let after = Utc::now().format("%Y").to_string();
        assert!(created.timestamp == before || created.timestamp == after);
    }

    #[test]
    fn test_null_triggers_and_format_decode_as_unset() {
        let config: TimestampConfig =
            serde_json::from_value(serde_json::json!({ "triggers": null, "format": null })).unwrap();
        assert_eq!(config, TimestampConfig::default());

        let tracked: TimestampState = serde_json::from_value(serde_json::json!({
            "id": "2024",
            "triggers": null,
            "format": "%Y",
            "timestamp": "2024"
        }))
        .unwrap();
        assert!(tracked.triggers.is_empty());
    }

    #[test]
    fn test_read_is_noop() {
        let state = import("2024-01-01 00:00:00").unwrap();
        assert_eq!(read(&state), state);
    }

    #[test]
    fn test_import_timestamp_only() {
        let imported = import("2024-01-01 10:00:00").unwrap();
        assert_eq!(imported.timestamp, "2024-01-01 10:00:00");
        assert_eq!(imported.id, "2024-01-01 10:00:00");
        assert_eq!(imported.format, None);
    }

    #[test]
    fn test_import_timestamp_and_format() {
        let imported = import("20240101,%Y%m%d").unwrap();
        assert_eq!(imported.timestamp, "20240101");
        assert_eq!(imported.format.as_deref(), Some("%Y%m%d"));
    }

    #[test]
    fn test_import_does_not_validate() {
        let imported = import("not a time,also not a format").unwrap();
        assert_eq!(imported.timestamp, "not a time");
    }

    #[test]
    fn test_import_too_many_parts() {
        let err = import("a,b,c").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidImportFormat { .. }));
    }

    #[test]
    fn test_plan_create() {
        let defaults = TimestampDefaults::default();
        let planned = plan(None, &TimestampConfig::default(), &defaults);
        assert_eq!(planned.planned_state["format"], "%Y-%m-%d %H:%M:%S");
        assert_eq!(
            planned.unknown_attributes,
            vec!["timestamp".to_string(), "id".to_string()]
        );
    }

    #[test]
    fn test_plan_unchanged_keeps_prior() {
        let defaults = TimestampDefaults::default();
        let prior = create_at(&TimestampConfig::default(), &defaults, &fixed_time()).unwrap();
        let planned = plan(Some(&prior), &TimestampConfig::default(), &defaults);
        assert!(planned.requires_replace.is_empty());
        assert_eq!(planned.planned_state["timestamp"], "2024-03-09 07:05:02");
    }

    #[test]
    fn test_plan_trigger_change_requires_replace() {
        let defaults = TimestampDefaults::default();
        let prior = create_at(&TimestampConfig::default(), &defaults, &fixed_time()).unwrap();
        let mut config = TimestampConfig::default();
        config.triggers.insert("rev".to_string(), "2".to_string());
        let planned = plan(Some(&prior), &config, &defaults);
        assert_eq!(planned.requires_replace, vec!["triggers".to_string()]);
        assert!(planned.planned_state["timestamp"].is_null());
    }

    #[test]
    fn test_plan_format_change_requires_replace() {
        let defaults = TimestampDefaults::default();
        let prior = create_at(&TimestampConfig::default(), &defaults, &fixed_time()).unwrap();
        let planned = plan(Some(&prior), &with_format("%s"), &defaults);
        assert_eq!(planned.requires_replace, vec!["format".to_string()]);
    }
}

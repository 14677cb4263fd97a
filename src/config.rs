//! Provider configuration.
//!
//! Built-in defaults, optionally overridden by a TOML file passed with
//! `--config` or `CUSTOM_PROVIDER_CONFIG`.

use std::fs;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use custom_protocol::{PROTOCOL_MAX, PROTOCOL_MIN};

/// Default timestamp pattern, `2006-01-02 15:04:05` in strftime form.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Clock used when capturing timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timezone {
    /// Host local time.
    #[default]
    Local,
    Utc,
}

/// Settings for the pinned timestamp resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampDefaults {
    /// Pattern used when the resource omits `format`.
    pub default_format: String,
    pub timezone: Timezone,
}

impl Default for TimestampDefaults {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            timezone: Timezone::Local,
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSource {
    pub path: String,
    /// SHA-256 digest of the raw file bytes.
    pub digest: String,
}

/// Provider configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Minimum supported protocol version.
    pub protocol_min: i32,
    /// Maximum supported protocol version.
    pub protocol_max: i32,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    pub timestamp: TimestampDefaults,
    /// Set by [`ProviderConfig::load`] when a file was read.
    #[serde(skip)]
    pub source: Option<ConfigSource>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            protocol_min: PROTOCOL_MIN,
            protocol_max: PROTOCOL_MAX,
            log_level: "info".to_string(),
            timestamp: TimestampDefaults::default(),
            source: None,
        }
    }
}

impl ProviderConfig {
    /// Load configuration, falling back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let bytes = fs::read(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)
            .map_err(|e| ConfigError::ParseError(format!("Invalid UTF-8: {}", e)))?;

        let mut config = Self::from_toml_str(&contents)?;
        config.source = Some(ConfigSource {
            path: path.to_string_lossy().to_string(),
            digest,
        });
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.protocol_min < 1 {
            return Err(ConfigError::ValidationError(format!(
                "protocol_min must be >= 1, got {}",
                self.protocol_min
            )));
        }
        if self.protocol_max < self.protocol_min {
            return Err(ConfigError::ValidationError(format!(
                "protocol_max ({}) must be >= protocol_min ({})",
                self.protocol_max, self.protocol_min
            )));
        }
        let pattern = &self.timestamp.default_format;
        if pattern.is_empty()
            || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
        {
            return Err(ConfigError::ValidationError(format!(
                "timestamp.default_format {:?} is not a valid strftime pattern",
                pattern
            )));
        }
        Ok(())
    }
}

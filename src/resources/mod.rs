//! Resource types served by the provider.

pub mod integer;
pub mod timestamp;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::config::ProviderConfig;
use crate::schema::ResourceSchema;

/// Deserialize an optional string map, treating `null` like an omitted key.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A resource type known to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    SequentialInteger,
    PinnedTimestamp,
}

impl ResourceType {
    /// All served types, in schema order.
    pub const ALL: [ResourceType; 2] = [Self::SequentialInteger, Self::PinnedTimestamp];

    /// Look up a type by its host-facing name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            integer::TYPE_NAME => Some(Self::SequentialInteger),
            timestamp::TYPE_NAME => Some(Self::PinnedTimestamp),
            _ => None,
        }
    }

    /// Host-facing type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SequentialInteger => integer::TYPE_NAME,
            Self::PinnedTimestamp => timestamp::TYPE_NAME,
        }
    }

    /// Attribute schema for this type.
    pub fn schema(&self, config: &ProviderConfig) -> ResourceSchema {
        match self {
            Self::SequentialInteger => integer::schema(),
            Self::PinnedTimestamp => timestamp::schema(&config.timestamp),
        }
    }
}

/// Schemas of every served type.
pub fn schemas(config: &ProviderConfig) -> Vec<ResourceSchema> {
    ResourceType::ALL.iter().map(|ty| ty.schema(config)).collect()
}

//! Resource schema construction and force-new planning.
//!
//! The wire types live in `custom_protocol::ops::schema`; this module adds
//! the constructors used by the resource definitions and the attribute
//! comparisons the plan operation needs.

use serde_json::Value;

pub use custom_protocol::ops::{Attribute, AttributeType, ResourceSchema};

/// A configuration attribute the user must set.
pub fn required(name: &str, ty: AttributeType, description: &str) -> Attribute {
    Attribute {
        name: name.to_string(),
        ty,
        description: description.to_string(),
        required: true,
        optional: false,
        computed: false,
        force_new: false,
        default: None,
    }
}

/// A configuration attribute the user may omit.
pub fn optional(name: &str, ty: AttributeType, description: &str) -> Attribute {
    Attribute {
        required: false,
        optional: true,
        ..required(name, ty, description)
    }
}

/// An attribute set only by the provider.
pub fn computed(name: &str, ty: AttributeType, description: &str) -> Attribute {
    Attribute {
        required: false,
        computed: true,
        ..required(name, ty, description)
    }
}

/// Builder-style modifiers for [`Attribute`].
pub trait AttributeExt {
    /// Mark the attribute as replace-on-change.
    fn force_new(self) -> Self;
    /// Value used when the configuration omits the attribute.
    fn with_default(self, value: Value) -> Self;
}

impl AttributeExt for Attribute {
    fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// Fill omitted or null attributes of `config` with schema defaults.
pub fn apply_defaults(schema: &ResourceSchema, config: &mut Value) {
    let Some(object) = config.as_object_mut() else {
        return;
    };
    for attr in &schema.attributes {
        let Some(default) = &attr.default else {
            continue;
        };
        let missing = object.get(&attr.name).map_or(true, Value::is_null);
        if missing {
            object.insert(attr.name.clone(), default.clone());
        }
    }
}

/// Names of force-new attributes whose configured value differs from prior
/// state.
///
/// Absent, null and empty-map values compare equal, so an optional map that
/// was never set does not trigger replacement.
pub fn replace_paths(schema: &ResourceSchema, prior: &Value, config: &Value) -> Vec<String> {
    schema
        .attributes
        .iter()
        .filter(|attr| attr.force_new && !attr.computed)
        .filter(|attr| {
            normalized(prior.get(&attr.name)) != normalized(config.get(&attr.name))
        })
        .map(|attr| attr.name.clone())
        .collect()
}

/// Names of computed attributes, reported unknown until apply.
pub fn computed_names(schema: &ResourceSchema) -> Vec<String> {
    schema
        .attributes
        .iter()
        .filter(|attr| attr.computed)
        .map(|attr| attr.name.clone())
        .collect()
}

fn normalized(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) if map.is_empty() => None,
        other => other,
    }
}

//! core::schema
//!
//! Attribute schemas for the provider and its data sources.
//!
//! A schema tells the host which attributes a block accepts, which ones
//! the caller must set and which ones the plugin computes. The host uses
//! [`Schema::validate_config`] to reject a configuration before any
//! handler runs.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::diagnostics::Diagnostics;
use super::types::AttributePath;

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeMode {
    /// The caller must set it.
    Required,
    /// The caller may set it.
    Optional,
    /// The plugin sets it; configuration must leave it unset.
    Computed,
}

/// The value type of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    /// A single string.
    String,
    /// A list of strings.
    StringList,
    /// A list of objects sharing one attribute set.
    ListNested {
        /// Attributes of each element
        attributes: BTreeMap<String, Attribute>,
    },
}

impl AttributeType {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            AttributeType::ListNested { .. } => value.is_array(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::StringList => "list of string",
            AttributeType::ListNested { .. } => "list of object",
        }
    }
}

/// A single attribute declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Value type
    #[serde(flatten)]
    pub kind: AttributeType,
    /// Who supplies the value
    pub mode: AttributeMode,
    /// Human-readable description
    pub description: String,
}

impl Attribute {
    /// A string attribute.
    pub fn string(mode: AttributeMode, description: impl Into<String>) -> Self {
        Self {
            kind: AttributeType::String,
            mode,
            description: description.into(),
        }
    }

    /// A list-of-strings attribute.
    pub fn string_list(mode: AttributeMode, description: impl Into<String>) -> Self {
        Self {
            kind: AttributeType::StringList,
            mode,
            description: description.into(),
        }
    }

    /// A list of nested objects.
    pub fn list_nested(
        mode: AttributeMode,
        description: impl Into<String>,
        attributes: BTreeMap<String, Attribute>,
    ) -> Self {
        Self {
            kind: AttributeType::ListNested { attributes },
            mode,
            description: description.into(),
        }
    }
}

/// A block schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// Attributes by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Build a schema from `(name, attribute)` pairs.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (S, Attribute)>,
        S: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(name, attr)| (name.into(), attr))
                .collect(),
        }
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check a configuration object against this schema.
    ///
    /// Adds one attribute error per problem: a required attribute left
    /// unset, a computed attribute that was set, an attribute the schema
    /// does not declare, or a value of the wrong type. A `null`
    /// configuration is treated as an empty object.
    pub fn validate_config(&self, config: &Value, diags: &mut Diagnostics) {
        let empty = serde_json::Map::new();
        let object = match config {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => {
                diags.add_error(
                    "Invalid Configuration",
                    format!("Expected an object, got: {}", json_kind(other)),
                );
                return;
            }
        };

        for name in object.keys() {
            if !self.attributes.contains_key(name) {
                diags.add_attribute_error(
                    AttributePath::root(name.clone()),
                    "Unsupported argument",
                    format!("An argument named \"{}\" is not expected here.", name),
                );
            }
        }

        for (name, attr) in &self.attributes {
            let value = object.get(name).filter(|v| !v.is_null());
            match (attr.mode, value) {
                (AttributeMode::Required, None) => diags.add_attribute_error(
                    AttributePath::root(name.clone()),
                    "Missing required argument",
                    format!(
                        "The argument \"{}\" is required, but no definition was found.",
                        name
                    ),
                ),
                (AttributeMode::Computed, Some(_)) => diags.add_attribute_error(
                    AttributePath::root(name.clone()),
                    "Invalid Configuration for Read-Only Attribute",
                    "Cannot set value for this attribute as the provider has marked it as \
                     read-only. Remove the configuration line setting the value.",
                ),
                (_, Some(value)) if !attr.kind.accepts(value) => diags.add_attribute_error(
                    AttributePath::root(name.clone()),
                    "Incorrect attribute value type",
                    format!(
                        "Inappropriate value for attribute \"{}\": {} required, got {}.",
                        name,
                        attr.kind.describe(),
                        json_kind(value)
                    ),
                ),
                _ => {}
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

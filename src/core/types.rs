//! core::types
//!
//! Value types shared by the provider, its data sources and the host.
//!
//! # Types
//!
//! - [`ConfigValue`] - A configuration value that may be null or not yet known
//! - [`AttributePath`] - Location of an attribute inside a schema
//!
//! # Examples
//!
//! ```
//! use gitlocal::core::types::{AttributePath, ConfigValue};
//!
//! let path: ConfigValue<String> = ConfigValue::known("/srv/repo".to_string());
//! assert_eq!(path.as_known().map(String::as_str), Some("/srv/repo"));
//!
//! let attr = AttributePath::root("path");
//! assert_eq!(attr.to_string(), "path");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A configuration value as the host hands it over.
///
/// During planning a host may not know a value yet (it depends on
/// something not applied), which is distinct from the value being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigValue<T> {
    /// Not set in configuration.
    #[default]
    Null,
    /// Set, but only resolvable later.
    Unknown,
    /// Set to a concrete value.
    Known(T),
}

impl<T> ConfigValue<T> {
    /// Wrap a concrete value.
    pub fn known(value: T) -> Self {
        ConfigValue::Known(value)
    }

    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Check if the value is unknown.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ConfigValue::Unknown)
    }

    /// The concrete value, if known.
    pub fn as_known(&self) -> Option<&T> {
        match self {
            ConfigValue::Known(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for ConfigValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => ConfigValue::Known(value),
            None => ConfigValue::Null,
        }
    }
}

// JSON has no notion of "unknown": null and absent both decode to Null.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConfigValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(ConfigValue::from)
    }
}

/// The attribute a diagnostic is attached to.
///
/// Every attribute this provider validates is top-level, so a path is a
/// single attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributePath(String);

impl AttributePath {
    /// Path to a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for AttributePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Provider Config
//!
//! What the host passes to the provider's configure step. Decoded from
//! the host's JSON; `path` may be absent, null or a string.
//!
//! # Config File
//!
//! What the command-line host reads from `--config <FILE>`:
//!
//! ```toml
//! path = "/srv/checkouts/infrastructure"
//! ```

use serde::{Deserialize, Serialize};

use crate::core::types::ConfigValue;

/// Provider configuration as received from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    /// Path to the root of the local git repository
    #[serde(default)]
    pub path: ConfigValue<String>,
}

impl ProviderConfig {
    /// A configuration with a concrete path.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: ConfigValue::known(path.into()),
        }
    }
}

/// Command-line host config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Repository path handed to the provider
    pub path: Option<String>,
}

impl ConfigFile {
    /// Convert into the provider configuration the host would send.
    pub fn into_provider_config(self) -> ProviderConfig {
        ProviderConfig {
            path: self.path.into(),
        }
    }
}

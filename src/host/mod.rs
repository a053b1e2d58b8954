//! host
//!
//! A minimal in-process host for the provider.
//!
//! # Architecture
//!
//! A [`Session`] plays the part of the configuration host for one run:
//! it configures the provider exactly once, keeps the resulting provider
//! data, and dispatches reads to data sources by type name. It stands in
//! for the RPC transport a real host would use; the provider and data
//! sources are driven through the same calls either way.
//!
//! # Invariants
//!
//! - A session exists only if provider configure succeeded, so no query
//!   can run against a misconfigured provider
//! - Every read validates its configuration against the data source
//!   schema before the data source sees it
//! - A read either returns state or error diagnostics, never both
//!
//! # Example
//!
//! ```no_run
//! use gitlocal::core::config::ProviderConfig;
//! use gitlocal::host::Session;
//! use gitlocal::provider::GitLocalProvider;
//! use serde_json::json;
//!
//! let session = Session::start(
//!     GitLocalProvider::new("dev"),
//!     &ProviderConfig::with_path("/srv/repo"),
//! )
//! .expect("provider configured");
//!
//! let head = session.read("gitlocal_head", &json!({}));
//! println!("{:?}", head.state);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::core::config::{self, ProviderConfig};
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::Schema;
use crate::provider::{DataSourceFactory, GitLocalProvider, ProviderData, ReadResponse};

/// Every schema the provider exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    /// Provider type name
    pub provider: String,
    /// Provider version
    pub version: String,
    /// Provider configuration schema
    pub provider_schema: Schema,
    /// Data source schemas by full type name
    pub data_sources: BTreeMap<String, Schema>,
}

/// Collect the provider and data source schemas.
///
/// Needs no repository; nothing is configured.
pub fn schemas(provider: &GitLocalProvider) -> SchemaDocument {
    let meta = provider.metadata();
    let data_sources = provider
        .data_sources()
        .into_iter()
        .map(|factory| {
            let source = factory();
            (source.type_name(&meta.type_name), source.schema())
        })
        .collect();

    SchemaDocument {
        provider: meta.type_name,
        version: meta.version,
        provider_schema: provider.schema(),
        data_sources,
    }
}

/// A configured provider ready to answer reads.
pub struct Session {
    provider: GitLocalProvider,
    data: ProviderData,
    data_sources: BTreeMap<String, DataSourceFactory>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("provider", &self.provider)
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Session {
    /// Configure `provider` using the process environment for fallback.
    ///
    /// # Errors
    ///
    /// Returns the configure diagnostics if they contain an error.
    pub fn start(provider: GitLocalProvider, config: &ProviderConfig) -> Result<Self, Diagnostics> {
        Self::start_with_env(provider, config, config::path_from_env().as_deref())
    }

    /// Configure `provider` with an explicit `$GIT_LOCAL_PATH` value.
    ///
    /// # Errors
    ///
    /// Returns the configure diagnostics if they contain an error.
    pub fn start_with_env(
        provider: GitLocalProvider,
        config: &ProviderConfig,
        env: Option<&str>,
    ) -> Result<Self, Diagnostics> {
        let response = provider.configure_with_env(config, env);

        let data = match response.data {
            Some(data) if !response.diagnostics.has_error() => data,
            _ => return Err(response.diagnostics),
        };

        let type_name = provider.metadata().type_name;
        let data_sources = provider
            .data_sources()
            .into_iter()
            .map(|factory| (factory().type_name(&type_name), factory))
            .collect();

        Ok(Self {
            provider,
            data,
            data_sources,
        })
    }

    /// Configure `provider` from raw host JSON.
    ///
    /// The JSON is checked against the provider schema first.
    ///
    /// # Errors
    ///
    /// Returns diagnostics if validation, decoding or configure fails.
    pub fn start_from_json(
        provider: GitLocalProvider,
        config: &Value,
        env: Option<&str>,
    ) -> Result<Self, Diagnostics> {
        let mut diags = Diagnostics::new();
        provider.schema().validate_config(config, &mut diags);
        if diags.has_error() {
            return Err(diags);
        }

        let config = if config.is_null() {
            ProviderConfig::default()
        } else {
            match serde_json::from_value::<ProviderConfig>(config.clone()) {
                Ok(config) => config,
                Err(e) => {
                    diags.add_error(
                        "Invalid Provider Configuration",
                        format!(
                            "The configuration could not be decoded: {}. \
                             Please report this issue to the provider developers.",
                            e
                        ),
                    );
                    return Err(diags);
                }
            }
        };

        Self::start_with_env(provider, &config, env)
    }

    /// Full type names of the data sources this session can read.
    pub fn data_source_names(&self) -> Vec<&str> {
        self.data_sources.keys().map(String::as_str).collect()
    }

    /// Read data source `type_name` with query configuration `config`.
    ///
    /// A fresh data source is created per read and receives the session's
    /// repository handle; nothing is cached between reads.
    pub fn read(&self, type_name: &str, config: &Value) -> ReadResponse {
        let mut diags = Diagnostics::new();

        let factory = match self.data_sources.get(type_name) {
            Some(factory) => factory,
            None => {
                diags.add_error(
                    "Unknown Data Source",
                    format!(
                        "The provider does not offer a data source named \"{}\". \
                         Available: {}.",
                        type_name,
                        self.data_source_names().join(", ")
                    ),
                );
                return ReadResponse::failed(diags);
            }
        };

        let config = if config.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            config.clone()
        };

        let mut source = factory();
        source.schema().validate_config(&config, &mut diags);
        if diags.has_error() {
            return ReadResponse::failed(diags);
        }

        source.configure(Some(&self.data), &mut diags);
        if diags.has_error() {
            return ReadResponse::failed(diags);
        }

        let response = source.read(&config);
        diags.append(response.diagnostics);
        ReadResponse {
            state: response.state.filter(|_| !diags.has_error()),
            diagnostics: diags,
        }
    }
}

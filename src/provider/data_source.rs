//! provider::data_source
//!
//! The contract every data source implements.
//!
//! # Lifecycle
//!
//! The host creates a data source from its factory, asks for its type
//! name and schema, injects the provider data with
//! [`DataSource::configure`], then calls [`DataSource::read`] once per
//! query. A data source keeps no state between reads apart from the
//! shared repository handle.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::data::ProviderData;
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::Schema;

/// Creates a fresh, unconfigured data source.
pub type DataSourceFactory = fn() -> Box<dyn DataSource>;

/// Result of a single read.
///
/// `state` is `None` whenever `diagnostics` contains an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadResponse {
    /// The full state to persist
    pub state: Option<Value>,
    /// Diagnostics produced by the read
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    /// A failed read carrying its diagnostics.
    pub fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }
}

/// A read-only view the host can query.
pub trait DataSource {
    /// Full type name, e.g. `gitlocal_head` for provider `gitlocal`.
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Attributes accepted and produced by this data source.
    fn schema(&self) -> Schema;

    /// Receive the provider data. Absent data is not an error.
    fn configure(&mut self, data: Option<&ProviderData>, diags: &mut Diagnostics);

    /// Answer one query. `config` has already been validated against
    /// [`DataSource::schema`].
    fn read(&self, config: &Value) -> ReadResponse;
}

/// Decode query configuration into a data source's model.
pub(crate) fn decode_config<T: DeserializeOwned>(
    config: &Value,
    diags: &mut Diagnostics,
) -> Option<T> {
    match serde_json::from_value(config.clone()) {
        Ok(model) => Some(model),
        Err(e) => {
            diags.add_error(
                "Invalid Data Source Configuration",
                format!(
                    "The configuration could not be decoded: {}. \
                     Please report this issue to the provider developers.",
                    e
                ),
            );
            None
        }
    }
}

/// Finish a read: encode the model as state, or fail with diagnostics.
pub(crate) fn finish<T: Serialize>(state: Option<T>, mut diags: Diagnostics) -> ReadResponse {
    let state = match state {
        Some(state) if !diags.has_error() => state,
        _ => return ReadResponse::failed(diags),
    };

    match serde_json::to_value(state) {
        Ok(value) => ReadResponse {
            state: Some(value),
            diagnostics: diags,
        },
        Err(e) => {
            diags.add_error(
                "Unable to Set State",
                format!(
                    "The result could not be encoded: {}. \
                     Please report this issue to the provider developers.",
                    e
                ),
            );
            ReadResponse::failed(diags)
        }
    }
}

//! provider::remote
//!
//! `<provider>_remote`: URLs of one named remote. Also declares the
//! remote attribute set that `<provider>_remotes` reuses per element.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::data::{repository_from, require_repository, ProviderData};
use super::data_source::{decode_config, finish, DataSource, ReadResponse};
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::{Attribute, AttributeMode, Schema};
use crate::git::{Git, RemoteInfo};

/// Attributes describing one remote.
///
/// `single` is true for the single-remote data source, where the caller
/// supplies `name`; in the remotes list every attribute is computed.
pub fn remote_attributes(single: bool) -> BTreeMap<String, Attribute> {
    let name_mode = if single {
        AttributeMode::Required
    } else {
        AttributeMode::Computed
    };

    BTreeMap::from([
        (
            "name".to_string(),
            Attribute::string(name_mode, "Name of the remote"),
        ),
        (
            "urls".to_string(),
            Attribute::string_list(AttributeMode::Computed, "List of remote URLs"),
        ),
    ])
}

/// Query configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Name of the remote
    pub name: String,
}

/// One remote as written to state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteState {
    /// Name of the remote
    pub name: String,
    /// Configured URLs in config order
    pub urls: Vec<String>,
}

impl From<RemoteInfo> for RemoteState {
    fn from(remote: RemoteInfo) -> Self {
        Self {
            name: remote.name,
            urls: remote.urls,
        }
    }
}

/// Data source for a single named remote.
#[derive(Debug, Default)]
pub struct RemoteDataSource {
    repo: Option<Arc<Git>>,
}

impl RemoteDataSource {
    /// Unconfigured instance, as the host creates it.
    pub fn create() -> Box<dyn DataSource> {
        Box::new(Self::default())
    }

    /// Instance bound to an already opened repository.
    pub fn with_repository(repo: Arc<Git>) -> Self {
        Self { repo: Some(repo) }
    }

    /// Look up remote `name`, reporting failures into `diags`.
    pub fn read_state(&self, name: &str, diags: &mut Diagnostics) -> Option<RemoteState> {
        let git = require_repository(&self.repo, diags)?;

        match git.remote(name) {
            Ok(remote) => Some(RemoteState {
                name: name.to_string(),
                urls: remote.urls,
            }),
            Err(e) => {
                diags.add_error(format!("Unable to Read Git Remote `{}`", name), e.to_string());
                None
            }
        }
    }
}

impl DataSource for RemoteDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_remote", provider_type_name)
    }

    fn schema(&self) -> Schema {
        Schema {
            attributes: remote_attributes(true),
        }
    }

    fn configure(&mut self, data: Option<&ProviderData>, diags: &mut Diagnostics) {
        if let Some(repo) = repository_from(data, diags) {
            self.repo = Some(repo);
        }
    }

    fn read(&self, config: &Value) -> ReadResponse {
        let mut diags = Diagnostics::new();
        let state = decode_config::<RemoteConfig>(config, &mut diags)
            .and_then(|config| self.read_state(&config.name, &mut diags));
        finish(state, diags)
    }
}

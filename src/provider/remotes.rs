//! provider::remotes
//!
//! `<provider>_remotes`: every configured remote with its URLs.
//!
//! Remotes are listed in the order git2 enumerates them. That order is
//! passed through untouched and may change when the repository
//! configuration changes.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::data::{repository_from, require_repository, ProviderData};
use super::data_source::{finish, DataSource, ReadResponse};
use super::remote::{remote_attributes, RemoteState};
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::{Attribute, AttributeMode, Schema};
use crate::git::Git;

/// State written by a remotes read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemotesState {
    /// All remotes in enumeration order
    pub remotes: Vec<RemoteState>,
}

/// Data source listing all remotes.
#[derive(Debug, Default)]
pub struct RemotesDataSource {
    repo: Option<Arc<Git>>,
}

impl RemotesDataSource {
    /// Unconfigured instance, as the host creates it.
    pub fn create() -> Box<dyn DataSource> {
        Box::new(Self::default())
    }

    /// Instance bound to an already opened repository.
    pub fn with_repository(repo: Arc<Git>) -> Self {
        Self { repo: Some(repo) }
    }

    /// Enumerate remotes, reporting failures into `diags`.
    pub fn read_state(&self, diags: &mut Diagnostics) -> Option<RemotesState> {
        let git = require_repository(&self.repo, diags)?;

        match git.remotes() {
            Ok(remotes) => Some(RemotesState {
                remotes: remotes.into_iter().map(RemoteState::from).collect(),
            }),
            Err(e) => {
                diags.add_error("Unable to Read Git Remotes", e.to_string());
                None
            }
        }
    }
}

impl DataSource for RemotesDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_remotes", provider_type_name)
    }

    fn schema(&self) -> Schema {
        Schema::new([(
            "remotes",
            Attribute::list_nested(
                AttributeMode::Computed,
                "List of remotes in the repository",
                remote_attributes(false),
            ),
        )])
    }

    fn configure(&mut self, data: Option<&ProviderData>, diags: &mut Diagnostics) {
        if let Some(repo) = repository_from(data, diags) {
            self.repo = Some(repo);
        }
    }

    fn read(&self, _config: &Value) -> ReadResponse {
        let mut diags = Diagnostics::new();
        let state = self.read_state(&mut diags);
        finish(state, diags)
    }
}

//! provider::head
//!
//! `<provider>_head`: the commit HEAD currently resolves to.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::data::{repository_from, require_repository, ProviderData};
use super::data_source::{finish, DataSource, ReadResponse};
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::{Attribute, AttributeMode, Schema};
use crate::git::Git;

/// State written by a head read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadState {
    /// Hash of the commit
    pub hash: String,
}

/// Data source for the current HEAD commit.
#[derive(Debug, Default)]
pub struct HeadDataSource {
    repo: Option<Arc<Git>>,
}

impl HeadDataSource {
    /// Unconfigured instance, as the host creates it.
    pub fn create() -> Box<dyn DataSource> {
        Box::new(Self::default())
    }

    /// Instance bound to an already opened repository.
    pub fn with_repository(repo: Arc<Git>) -> Self {
        Self { repo: Some(repo) }
    }

    /// Read HEAD, reporting failures into `diags`.
    pub fn read_state(&self, diags: &mut Diagnostics) -> Option<HeadState> {
        let git = require_repository(&self.repo, diags)?;

        match git.head_oid() {
            Ok(hash) => Some(HeadState { hash }),
            Err(e) => {
                diags.add_error("Unable to Read Git Head", e.to_string());
                None
            }
        }
    }
}

impl DataSource for HeadDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_head", provider_type_name)
    }

    fn schema(&self) -> Schema {
        Schema::new([(
            "hash",
            Attribute::string(AttributeMode::Computed, "Hash of the commit"),
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

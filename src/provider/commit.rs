//! provider::commit
//!
//! `<provider>_commit`: date and message of a commit looked up by hash.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::data::{repository_from, require_repository, ProviderData};
use super::data_source::{decode_config, finish, DataSource, ReadResponse};
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::{Attribute, AttributeMode, Schema};
use crate::git::Git;

/// Query configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitConfig {
    /// Hash of the commit, passed to git as-is
    pub hash: String,
}

/// State written by a commit read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitState {
    /// The hash exactly as configured
    pub hash: String,
    /// Author date in RFC 3339 with the author's offset
    pub date: String,
    /// Full message, trailing newline included
    pub message: String,
}

/// Data source for a single commit.
#[derive(Debug, Default)]
pub struct CommitDataSource {
    repo: Option<Arc<Git>>,
}

impl CommitDataSource {
    /// Unconfigured instance, as the host creates it.
    pub fn create() -> Box<dyn DataSource> {
        Box::new(Self::default())
    }

    /// Instance bound to an already opened repository.
    pub fn with_repository(repo: Arc<Git>) -> Self {
        Self { repo: Some(repo) }
    }

    /// Look up `hash`, reporting failures into `diags`.
    pub fn read_state(&self, hash: &str, diags: &mut Diagnostics) -> Option<CommitState> {
        let git = require_repository(&self.repo, diags)?;

        match git.commit_info(hash) {
            Ok(commit) => Some(CommitState {
                hash: hash.to_string(),
                date: commit.date_rfc3339(),
                message: commit.message,
            }),
            Err(e) => {
                diags.add_error(format!("Unable to Read Commit `{}`", hash), e.to_string());
                None
            }
        }
    }
}

impl DataSource for CommitDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_commit", provider_type_name)
    }

    fn schema(&self) -> Schema {
        Schema::new([
            (
                "hash",
                Attribute::string(AttributeMode::Required, "Hash of the commit"),
            ),
            (
                "date",
                Attribute::string(AttributeMode::Computed, "Date of the commit in RFC 3339"),
            ),
            (
                "message",
                Attribute::string(AttributeMode::Computed, "Message of the commit"),
            ),
        ])
    }

    fn configure(&mut self, data: Option<&ProviderData>, diags: &mut Diagnostics) {
        if let Some(repo) = repository_from(data, diags) {
            self.repo = Some(repo);
        }
    }

    fn read(&self, config: &Value) -> ReadResponse {
        let mut diags = Diagnostics::new();
        let state = decode_config::<CommitConfig>(config, &mut diags)
            .and_then(|config| self.read_state(&config.hash, &mut diags));
        finish(state, diags)
    }
}

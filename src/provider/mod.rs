//! provider
//!
//! The `gitlocal` provider and its data sources.
//!
//! # Architecture
//!
//! The provider validates its configuration, opens the repository once
//! and hands the handle to each data source as opaque [`ProviderData`].
//! Data sources recover the handle through [`repository_from`], the one
//! place that checks the data is what they expect.
//!
//! | Type name | Input | Output |
//! |---|---|---|
//! | `gitlocal_head` | - | `hash` |
//! | `gitlocal_commit` | `hash` | `hash`, `date`, `message` |
//! | `gitlocal_remote` | `name` | `name`, `urls` |
//! | `gitlocal_remotes` | - | `remotes[] { name, urls }` |
//!
//! # Example
//!
//! ```no_run
//! use gitlocal::core::config::ProviderConfig;
//! use gitlocal::provider::GitLocalProvider;
//!
//! let provider = GitLocalProvider::new("dev");
//! let configured = provider.configure(&ProviderConfig::with_path("/srv/repo"));
//! assert!(!configured.diagnostics.has_error());
//! ```

mod commit;
mod data;
mod data_source;
mod head;
mod remote;
mod remotes;

pub use commit::{CommitConfig, CommitDataSource, CommitState};
pub use data::{repository_data, repository_from, ProviderData};
pub use data_source::{DataSource, DataSourceFactory, ReadResponse};
pub use head::{HeadDataSource, HeadState};
pub use remote::{remote_attributes, RemoteConfig, RemoteDataSource, RemoteState};
pub use remotes::{RemotesDataSource, RemotesState};

use std::path::Path;

use crate::core::config::{self, PathError, ProviderConfig};
use crate::core::diagnostics::Diagnostics;
use crate::core::schema::{Attribute, AttributeMode, Schema};
use crate::core::types::AttributePath;
use crate::git::Git;

/// Provider type name; data source names are prefixed with it.
pub const TYPE_NAME: &str = "gitlocal";

/// Name and version reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Provider type name
    pub type_name: String,
    /// Provider version
    pub version: String,
}

/// Outcome of provider configure.
///
/// `data` is only set when `diagnostics` has no error.
#[derive(Debug, Default)]
pub struct ConfigureResponse {
    /// Diagnostics produced while configuring
    pub diagnostics: Diagnostics,
    /// Data to pass to every data source
    pub data: Option<ProviderData>,
}

/// The provider.
#[derive(Debug, Clone)]
pub struct GitLocalProvider {
    /// "dev" for local builds, "test" under tests, the release version otherwise
    version: String,
}

impl GitLocalProvider {
    /// Create a provider reporting `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Provider type name and version.
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    /// Provider configuration schema.
    ///
    /// `path` is optional at the schema level so an absent value can fall
    /// back to `$GIT_LOCAL_PATH`; configure still rejects an empty result.
    pub fn schema(&self) -> Schema {
        Schema::new([(
            "path",
            Attribute::string(
                AttributeMode::Optional,
                "Path to the root of the local git repository",
            ),
        )])
    }

    /// Configure using the process environment for the path fallback.
    pub fn configure(&self, config: &ProviderConfig) -> ConfigureResponse {
        self.configure_with_env(config, config::path_from_env().as_deref())
    }

    /// Validate `config`, resolve the path and open the repository.
    ///
    /// `env` stands in for `$GIT_LOCAL_PATH`. Each check stops
    /// configuration as soon as it reports an error, so nothing is opened
    /// unless the path is usable.
    pub fn configure_with_env(&self, config: &ProviderConfig, env: Option<&str>) -> ConfigureResponse {
        let mut diagnostics = Diagnostics::new();

        let path = match config::resolve_path(&config.path, env) {
            Ok(path) => path,
            Err(PathError::Unknown) => {
                diagnostics.add_attribute_error(
                    AttributePath::root("path"),
                    "Unknown git path",
                    format!(
                        "The provider cannot open the git repository as there is an unknown \
                         configuration value for the path. Either target apply the source of the \
                         value first, set the value statically in the configuration, or use the \
                         {} environment variable.",
                        config::PATH_ENV
                    ),
                );
                return ConfigureResponse {
                    diagnostics,
                    data: None,
                };
            }
            Err(PathError::Missing) => {
                diagnostics.add_attribute_error(
                    AttributePath::root("path"),
                    "Missing Git Local Path",
                    format!(
                        "The provider cannot open the git repository as there is a missing or \
                         empty value for the path. Set the path value in the configuration or use \
                         the {} environment variable. If either is already set, ensure the value \
                         is not empty.",
                        config::PATH_ENV
                    ),
                );
                return ConfigureResponse {
                    diagnostics,
                    data: None,
                };
            }
        };

        match Git::open(Path::new(&path)) {
            Ok(git) => ConfigureResponse {
                diagnostics,
                data: Some(repository_data(git)),
            },
            Err(e) => {
                diagnostics.add_error(
                    "Unable to Open Git Repository",
                    format!(
                        "An unexpected error occurred when opening the git repository. \
                         If the error is not clear, please contact the provider developers.\n\n\
                         Git Error: {}",
                        e
                    ),
                );
                ConfigureResponse {
                    diagnostics,
                    data: None,
                }
            }
        }
    }

    /// Factories for every data source this provider offers.
    pub fn data_sources(&self) -> Vec<DataSourceFactory> {
        vec![
            CommitDataSource::create as DataSourceFactory,
            HeadDataSource::create,
            RemoteDataSource::create,
            RemotesDataSource::create,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ConfigValue;

    fn summaries(diags: &Diagnostics) -> Vec<String> {
        diags.iter().map(|d| d.summary.clone()).collect()
    }

    #[test]
    fn metadata_reports_type_and_version() {
        let meta = GitLocalProvider::new("test").metadata();
        assert_eq!(meta.type_name, "gitlocal");
        assert_eq!(meta.version, "test");
    }

    #[test]
    fn path_may_be_left_to_env() {
        let schema = GitLocalProvider::new("test").schema();
        assert_eq!(
            schema.attribute("path").map(|a| a.mode),
            Some(AttributeMode::Optional)
        );
    }

    #[test]
    fn data_source_names() {
        let provider = GitLocalProvider::new("test");
        let names: Vec<_> = provider
            .data_sources()
            .into_iter()
            .map(|factory| factory().type_name(TYPE_NAME))
            .collect();
        assert_eq!(
            names,
            vec![
                "gitlocal_commit",
                "gitlocal_head",
                "gitlocal_remote",
                "gitlocal_remotes"
            ]
        );
    }

    #[test]
    fn unknown_path_is_attributed() {
        let config = ProviderConfig {
            path: ConfigValue::Unknown,
        };
        let response = GitLocalProvider::new("test").configure_with_env(&config, Some("/x"));

        assert!(response.data.is_none());
        assert_eq!(summaries(&response.diagnostics), vec!["Unknown git path"]);
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.attribute, Some(AttributePath::root("path")));
        assert!(diag.detail.contains("GIT_LOCAL_PATH"));
    }

    #[test]
    fn missing_path_is_attributed() {
        let response =
            GitLocalProvider::new("test").configure_with_env(&ProviderConfig::default(), None);

        assert!(response.data.is_none());
        assert_eq!(summaries(&response.diagnostics), vec!["Missing Git Local Path"]);
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.attribute, Some(AttributePath::root("path")));
    }

    #[test]
    fn empty_configured_path_is_missing() {
        let response = GitLocalProvider::new("test")
            .configure_with_env(&ProviderConfig::with_path(""), Some("/ignored"));
        assert_eq!(summaries(&response.diagnostics), vec!["Missing Git Local Path"]);
    }

    #[test]
    fn open_failure_carries_git_error() {
        let response = GitLocalProvider::new("test").configure_with_env(
            &ProviderConfig::with_path("/nonexistent/gitlocal/repo"),
            None,
        );

        assert!(response.data.is_none());
        assert_eq!(
            summaries(&response.diagnostics),
            vec!["Unable to Open Git Repository"]
        );
        let diag = response.diagnostics.iter().next().unwrap();
        assert!(diag.attribute.is_none());
        assert!(diag.detail.contains("Git Error: "));
    }
}

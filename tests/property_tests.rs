//! Property-based tests for configuration and core types.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;
use serde_json::{json, Value};

use gitlocal::core::config::{resolve_path, PathError};
use gitlocal::core::diagnostics::Diagnostics;
use gitlocal::core::types::{AttributePath, ConfigValue};
use gitlocal::provider::{
    CommitDataSource, DataSource, HeadDataSource, RemoteDataSource, RemotesDataSource,
};

/// Strategy for generating plausible repository paths.
fn repo_path() -> impl Strategy<Value = String> {
    "/[a-zA-Z0-9_.-]{1,20}(/[a-zA-Z0-9_.-]{1,20}){0,4}"
}

/// Strategy for generating attribute names.
fn attribute_name() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,15}"
}

proptest! {
    /// A configured non-empty path is used no matter what the environment says.
    #[test]
    fn known_path_wins(path in repo_path(), env in proptest::option::of(repo_path())) {
        let config = ConfigValue::known(path.clone());
        prop_assert_eq!(resolve_path(&config, env.as_deref()), Ok(path));
    }

    /// A null path takes whatever non-empty value the environment has.
    #[test]
    fn null_path_uses_env(env in repo_path()) {
        prop_assert_eq!(resolve_path(&ConfigValue::Null, Some(env.as_str())), Ok(env.clone()));
    }

    /// An empty configured path is missing even with the environment set.
    #[test]
    fn empty_path_is_missing(env in proptest::option::of(repo_path())) {
        let config = ConfigValue::known(String::new());
        prop_assert_eq!(resolve_path(&config, env.as_deref()), Err(PathError::Missing));
    }

    /// An unknown path never consults the environment.
    #[test]
    fn unknown_path_is_unknown(env in proptest::option::of(repo_path())) {
        prop_assert_eq!(
            resolve_path(&ConfigValue::Unknown, env.as_deref()),
            Err(PathError::Unknown)
        );
    }

    /// Attribute paths render and serialize as the bare attribute name.
    #[test]
    fn attribute_path_is_its_name(name in attribute_name()) {
        let path = AttributePath::root(name.clone());
        prop_assert_eq!(path.to_string(), name.clone());
        prop_assert_eq!(serde_json::to_value(&path).unwrap(), Value::String(name));
    }

    /// Every data source rejects attributes its schema does not declare.
    #[test]
    fn undeclared_attributes_are_rejected(name in "[a-z]{1,12}", value in "[ -~]{0,20}") {
        let sources: Vec<Box<dyn DataSource>> = vec![
            Box::new(HeadDataSource::default()),
            Box::new(CommitDataSource::default()),
            Box::new(RemoteDataSource::default()),
            Box::new(RemotesDataSource::default()),
        ];

        for source in sources {
            let schema = source.schema();
            prop_assume!(schema.attribute(&name).is_none());

            let mut config = serde_json::Map::new();
            config.insert(name.clone(), Value::String(value.clone()));

            let mut diags = Diagnostics::new();
            schema.validate_config(&Value::Object(config), &mut diags);
            prop_assert!(diags.has_error());
        }
    }

    /// Reading without a repository always fails with exactly one diagnostic.
    #[test]
    fn unconfigured_read_reports_once(hash in "[0-9a-f]{40}", name in "[a-z]{1,12}") {
        let reads = [
            HeadDataSource::default().read(&json!({})),
            CommitDataSource::default().read(&json!({ "hash": hash })),
            RemoteDataSource::default().read(&json!({ "name": name })),
            RemotesDataSource::default().read(&json!({})),
        ];

        for response in reads {
            prop_assert!(response.state.is_none());
            prop_assert_eq!(response.diagnostics.len(), 1);
        }
    }
}

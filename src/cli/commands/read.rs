//! read command - Query one data source and print its state

use anyhow::{bail, Context as _, Result};
use serde_json::{Map, Value};

use crate::cli::Context;
use crate::core::config;
use crate::host::Session;
use crate::provider::GitLocalProvider;
use crate::ui::output;

/// Configure the provider, read `data_source` and print the state.
pub fn read(ctx: &Context, data_source: &str, attributes: &Value) -> Result<()> {
    let provider_config = config::provider_config(ctx.path.as_deref(), ctx.config.as_deref())?;
    output::debug(
        format!("provider config: path = {:?}", provider_config.path),
        ctx.verbosity,
    );

    let provider = GitLocalProvider::new(env!("CARGO_PKG_VERSION"));
    let session = match Session::start(provider, &provider_config) {
        Ok(session) => session,
        Err(diags) => {
            output::diagnostics(&diags);
            bail!("provider configuration failed");
        }
    };

    output::debug(
        format!("reading {} with {}", data_source, attributes),
        ctx.verbosity,
    );
    let response = session.read(data_source, attributes);
    output::diagnostics(&response.diagnostics);

    match response.state {
        Some(state) => {
            output::json(&state)?;
            Ok(())
        }
        None => bail!("reading {} failed", data_source),
    }
}

/// Build a query configuration from `--json` and `--set` arguments.
///
/// `--json` must be an object; `--set KEY=VALUE` pairs are applied on top
/// as string values, later ones winning.
pub fn parse_attributes(sets: &[String], json: Option<&str>) -> Result<Value> {
    let mut attributes = match json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("invalid --json value")? {
            Value::Object(map) => map,
            _ => bail!("--json must be a JSON object"),
        },
        None => Map::new(),
    };

    for set in sets {
        let (key, value) = set
            .split_once('=')
            .with_context(|| format!("invalid --set '{}', expected KEY=VALUE", set))?;
        if key.is_empty() {
            bail!("invalid --set '{}', key is empty", set);
        }
        attributes.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(Value::Object(attributes))
}

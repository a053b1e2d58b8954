//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each query command:
//! 1. Builds the provider configuration from the context
//! 2. Starts a session (configure runs exactly once)
//! 3. Reads one data source and prints its state
//!
//! `head`, `commit`, `remote` and `remotes` are shorthands for `read`
//! with the matching data source and attributes.

mod completion;
mod read;
mod schema;

pub use completion::completion;
pub use read::{parse_attributes, read};
pub use schema::schema;

use serde_json::json;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::provider::TYPE_NAME;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Schema => schema::schema(ctx),
        Command::Read {
            data_source,
            set,
            json,
        } => {
            let config = read::parse_attributes(&set, json.as_deref())?;
            read::read(ctx, &data_source, &config)
        }
        Command::Head => read::read(ctx, &format!("{}_head", TYPE_NAME), &json!({})),
        Command::Commit { hash } => read::read(
            ctx,
            &format!("{}_commit", TYPE_NAME),
            &json!({ "hash": hash }),
        ),
        Command::Remote { name } => read::read(
            ctx,
            &format!("{}_remote", TYPE_NAME),
            &json!({ "name": name }),
        ),
        Command::Remotes => read::read(ctx, &format!("{}_remotes", TYPE_NAME), &json!({})),
        Command::Completion { shell } => completion::completion(shell),
    }
}

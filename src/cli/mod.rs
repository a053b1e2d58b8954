//! cli
//!
//! Command-line host for the gitlocal provider.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build the provider configuration (`--path`, `--config`, environment)
//! - Start a [`crate::host::Session`] and dispatch reads to it
//! - Print state as JSON and diagnostics to stderr
//!
//! # Architecture
//!
//! The CLI layer is thin. It never opens the repository itself; every
//! query goes through the same session and data source calls a remote
//! host would make.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Explicit repository path
    pub path: Option<PathBuf>,
    /// TOML config file
    pub config: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        path: cli.path.clone(),
        config: cli.config.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}

//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--path <path>`: Repository to open (overrides `--config`)
//! - `--config <file>`: TOML file with `path = "..."`
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitlocal - Read-only data sources over a local git repository
#[derive(Parser, Debug)]
#[command(name = "gitlocal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the root of the local git repository [env: GIT_LOCAL_PATH]
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    /// Read provider configuration from this TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the provider and data source schemas as JSON
    #[command(
        name = "schema",
        long_about = "Print the provider and data source schemas as JSON.\n\n\
            Lists every data source the provider offers with its attributes, \
            whether each one is required, optional or computed, and its description. \
            No repository is opened."
    )]
    Schema,

    /// Read any data source by type name
    #[command(
        name = "read",
        long_about = "Read a data source by its full type name.\n\n\
            Query attributes are given with --set (string values) or --json (a JSON \
            object). The configuration is validated against the data source schema \
            before the repository is queried. The resulting state is printed as JSON.",
        after_help = "\
EXAMPLES:
    gitlocal --path . read gitlocal_head
    gitlocal --path . read gitlocal_commit --set hash=13981df24be0f47a94044d21bacdbc3d9132f162
    gitlocal --path . read gitlocal_remote --json '{\"name\": \"origin\"}'"
    )]
    Read {
        /// Data source type name, e.g. gitlocal_commit
        data_source: String,

        /// Set a string attribute (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Attributes as a JSON object
        #[arg(long, value_name = "JSON")]
        json: Option<String>,
    },

    /// Show the commit HEAD resolves to
    Head,

    /// Show the date and message of a commit
    Commit {
        /// Full commit hash
        hash: String,
    },

    /// Show the URLs of one remote
    Remote {
        /// Remote name
        name: String,
    },

    /// List all remotes and their URLs
    Remotes,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    gitlocal completion bash > ~/.local/share/bash-completion/completions/gitlocal

    # Zsh
    gitlocal completion zsh > ~/.zfunc/_gitlocal

    # Fish
    gitlocal completion fish > ~/.config/fish/completions/gitlocal.fish

    # PowerShell
    gitlocal completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

//! gitlocal - Read-only data sources over a local git repository
//!
//! gitlocal is a provider for declarative configuration hosts. It opens a
//! local git repository once and answers point queries against it: the
//! commit HEAD resolves to, a commit by hash, a named remote, and the list
//! of all remotes.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line host (parses args, drives a session)
//! - [`host`] - In-process host session: configure once, read many
//! - [`provider`] - The provider, its schemas and data sources
//! - [`core`] - Config values, diagnostics, schemas, configuration
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Terminal output
//!
//! # Correctness Invariants
//!
//! 1. The repository is opened once per session and never written
//! 2. Every failure produces exactly one diagnostic and no partial state
//! 3. No query runs unless provider configuration succeeded
//! 4. Only [`git`] talks to git2

pub mod cli;
pub mod core;
pub mod git;
pub mod host;
pub mod provider;
pub mod ui;

//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2`; data sources receive a shared [`Git`] handle and call its
//! query methods.
//!
//! # Responsibilities
//!
//! - Opening the repository at a configured path
//! - Resolving HEAD
//! - Commit lookup by hash
//! - Remote lookup and enumeration
//!
//! # Invariants
//!
//! - The repository is opened exactly once per handle
//! - Nothing is written through the handle
//! - Every query re-reads the repository (no caching)

mod interface;

pub use interface::{CommitInfo, Git, GitError, RemoteInfo};

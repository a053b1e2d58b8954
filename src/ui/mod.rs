//! ui
//!
//! Terminal output for the command-line host.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing of state and diagnostics

pub mod output;

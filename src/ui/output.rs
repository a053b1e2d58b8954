//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! State goes to stdout as JSON so it can be piped. Everything else
//! (diagnostics, debug lines) goes to stderr and respects the verbosity
//! flags; errors are always shown.

use std::fmt::Display;

use serde::Serialize;

use crate::core::diagnostics::{Diagnostic, Diagnostics};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print every diagnostic in order.
///
/// Diagnostics are always errors, so quiet mode does not hide them.
pub fn diagnostics(diags: &Diagnostics) {
    for diag in diags {
        error(format_diagnostic(diag));
    }
}

/// Print a value as pretty JSON on stdout.
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a diagnostic for the terminal.
///
/// The summary goes on the first line, the attribute (if any) in
/// parentheses, and the detail indented below.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let mut out = match &diagnostic.attribute {
        Some(attr) => format!("{} (at {})", diagnostic.summary, attr),
        None => diagnostic.summary.clone(),
    };

    for line in diagnostic.detail.lines() {
        out.push('\n');
        if !line.is_empty() {
            out.push_str("  ");
            out.push_str(line);
        }
    }

    out
}

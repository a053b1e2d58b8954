//! core
//!
//! Core types shared by the provider and the host.
//!
//! # Modules
//!
//! - [`types`] - Configuration values and attribute paths
//! - [`diagnostics`] - The diagnostics channel back to the host
//! - [`schema`] - Attribute schemas and configuration validation
//! - [`config`] - Provider configuration and path resolution
//!
//! # Design Principles
//!
//! - Nothing here touches the repository
//! - Failures are reported as diagnostics, never as panics

pub mod config;
pub mod diagnostics;
pub mod schema;
pub mod types;

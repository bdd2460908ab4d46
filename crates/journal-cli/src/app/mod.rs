//! Application-level utilities for the Journal CLI.
//!
//! This module provides:
//! - Path resolution for the config file
//! - Backend selection (local slot directory or remote service)

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;

//! # Journal Core
//!
//! Core library for Journal - a small journal entry manager. Entries carry a
//! title, notes and a photo URL, and persist either through a remote HTTP
//! service backed by a SQLite table or in a local key-value slot.
//!
//! This crate provides the entry model, the storage contract and every
//! backend, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `EntryStore` trait, entry types, local and SQLite backends
//! - **service**: axum HTTP service exposing `/api/entries`
//! - **remote**: blocking HTTP client of that service
//! - **fs**: atomic file writes used by the local backend

pub mod error;
pub mod fs;
pub mod remote;
pub mod service;
pub mod storage;

pub use error::{JournalError, RemoteError, Result};
pub use storage::{Entry, EntryId, EntryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

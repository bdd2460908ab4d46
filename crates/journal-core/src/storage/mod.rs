//! Storage abstraction for the journal.
//!
//! This module defines the `EntryStore` trait and the backends that
//! implement it.
//!
//! ## Backends
//!
//! - `LocalStore`: one JSON blob in a key-value slot (offline mode)
//! - `SqliteStore`: relational table used by the remote service
//! - `RemoteStore` (in `crate::remote`): HTTP client of that service
//!
//! All backends share the same `Entry` type and the same CRUD contract, so
//! callers pick one at startup and never branch on it afterwards.

pub mod local;
pub mod slot;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use local::{LocalState, LocalStore, LOCAL_STORAGE_KEY};
pub use slot::{FileSlot, KeyValueSlot, MemorySlot};
pub use sqlite::SqliteStore;
pub use traits::EntryStore;
pub use types::{Entry, EntryFields, EntryId, MISSING_FIELDS_MESSAGE};

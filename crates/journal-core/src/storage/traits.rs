//! Entry store trait definition.
//!
//! The `EntryStore` trait defines the CRUD contract shared by every backend:
//! the local key-value blob, the SQLite table behind the service, and the
//! HTTP client that talks to that service. Callers can swap one for another
//! without changing their code.

use super::types::{Entry, EntryId};
use crate::error::Result;

/// CRUD interface over the single `Entry` record type.
///
/// All implementations must ensure:
/// - `entryId` is assigned exactly once, on create, and never changes
/// - create and update reject entries with empty fields
/// - update replaces every mutable field (no partial merge)
pub trait EntryStore: Send {
    /// List every entry.
    ///
    /// Order is backend-defined: the local store keeps its front-inserted
    /// order (newest first), table-backed stores return ascending `entryId`.
    fn list(&self) -> Result<Vec<Entry>>;

    /// Get an entry by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Persist a new entry and return it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if any field is empty.
    fn create(&mut self, entry: &Entry) -> Result<Entry>;

    /// Replace an existing entry wholesale.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::InvalidInput` if `entry.entry_id` is absent,
    /// `JournalError::Validation` if any field is empty, and
    /// `JournalError::NotFound` if no entry has that identity.
    fn update(&mut self, entry: &Entry) -> Result<Entry>;

    /// Remove an entry.
    ///
    /// Whether a missing identity is an error is backend-defined: the local
    /// store treats it as a no-op, the remote service reports `NotFound`.
    fn delete(&mut self, id: EntryId) -> Result<()>;
}

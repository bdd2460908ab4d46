//! Local key-value storage backend.
//!
//! The whole journal lives in one JSON blob under `LOCAL_STORAGE_KEY`:
//! `{"entries": [...], "nextEntryId": n}`. Every operation reads the blob;
//! every mutation rewrites it in full. There is no locking, so only a single
//! writer may use a given slot at a time.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};
use crate::storage::slot::KeyValueSlot;
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, EntryId};

/// Slot key holding the serialized journal.
pub const LOCAL_STORAGE_KEY: &str = "code-journal-data";

/// The persisted local journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalState {
    /// Most recently created first
    pub entries: Vec<Entry>,

    /// Next identity to hand out; greater than every id ever assigned
    pub next_entry_id: EntryId,
}

impl Default for LocalState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_entry_id: 1,
        }
    }
}

/// The identity to hand out next.
///
/// A blob written by another client may carry a counter at or below an id it
/// already holds; the counter is raised past every stored id.
fn next_free_id(state: &LocalState) -> Result<EntryId> {
    let highest = state.entries.iter().filter_map(|entry| entry.entry_id).max();
    match highest {
        Some(highest) if highest >= state.next_entry_id => {
            highest.checked_add(1).ok_or_else(counter_exhausted)
        }
        _ => Ok(state.next_entry_id.max(1)),
    }
}

fn counter_exhausted() -> JournalError {
    JournalError::Storage("Local entry id counter is exhausted".to_string())
}

/// Entry store over a single key-value slot.
pub struct LocalStore<S: KeyValueSlot> {
    slot: S,
}

impl<S: KeyValueSlot> LocalStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Decode the persisted state, defaulting to an empty journal.
    ///
    /// The default is never written back by a read.
    pub fn state(&self) -> Result<LocalState> {
        match self.slot.read(LOCAL_STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(LocalState::default()),
        }
    }

    fn persist(&self, state: &LocalState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        self.slot.write(LOCAL_STORAGE_KEY, &raw)
    }

    /// All entries in stored order.
    pub fn read_all(&self) -> Result<Vec<Entry>> {
        Ok(self.state()?.entries)
    }

    /// The entry with identity `id`, if any.
    pub fn read_one(&self, id: EntryId) -> Result<Option<Entry>> {
        Ok(self
            .state()?
            .entries
            .into_iter()
            .find(|entry| entry.entry_id == Some(id)))
    }

    /// Assign the next identity and insert at the front.
    ///
    /// Any identity already on `entry` is ignored.
    pub fn create(&self, entry: &Entry) -> Result<Entry> {
        entry.validate()?;
        let mut state = self.state()?;

        let id = next_free_id(&state)?;
        let mut stored = entry.clone();
        stored.entry_id = Some(id);
        state.next_entry_id = id.checked_add(1).ok_or_else(counter_exhausted)?;
        state.entries.insert(0, stored.clone());

        self.persist(&state)?;
        debug!("Created local entry {}", id);
        Ok(stored)
    }

    /// Replace the entry with the same identity, keeping its position.
    pub fn update(&self, entry: &Entry) -> Result<Entry> {
        let id = entry
            .entry_id
            .ok_or_else(|| JournalError::InvalidInput("entryId is required".to_string()))?;
        entry.validate()?;
        let mut state = self.state()?;

        let existing = state
            .entries
            .iter_mut()
            .find(|existing| existing.entry_id == Some(id))
            .ok_or_else(|| JournalError::NotFound(format!("Entry {} not found.", id)))?;
        *existing = entry.clone();

        self.persist(&state)?;
        debug!("Updated local entry {}", id);
        Ok(entry.clone())
    }

    /// Remove the entry with identity `id`; missing ids are ignored.
    pub fn delete(&self, id: EntryId) -> Result<()> {
        let mut state = self.state()?;
        state.entries.retain(|entry| entry.entry_id != Some(id));
        self.persist(&state)?;
        debug!("Deleted local entry {}", id);
        Ok(())
    }
}

impl<S: KeyValueSlot> EntryStore for LocalStore<S> {
    fn list(&self) -> Result<Vec<Entry>> {
        self.read_all()
    }

    fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        self.read_one(id)
    }

    fn create(&mut self, entry: &Entry) -> Result<Entry> {
        LocalStore::create(self, entry)
    }

    fn update(&mut self, entry: &Entry) -> Result<Entry> {
        LocalStore::update(self, entry)
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        LocalStore::delete(self, id)
    }
}

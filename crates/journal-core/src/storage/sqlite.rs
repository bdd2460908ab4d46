//! SQLite-backed entry table.
//!
//! This is the relational store behind the remote service. Every statement
//! binds values through positional parameters; nothing is interpolated into
//! SQL text.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use log::debug;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};

use crate::error::{JournalError, Result};
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, EntryFields, EntryId};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    "entryId" INTEGER PRIMARY KEY AUTOINCREMENT,
    "title" TEXT NOT NULL,
    "notes" TEXT NOT NULL,
    "photoUrl" TEXT NOT NULL
);
"#;

/// Entry table in a SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        debug!("Opened entry database at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| JournalError::Storage("SQLite connection poisoned".to_string()))
    }

    fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
        Ok(Entry {
            entry_id: Some(row.get("entryId")?),
            title: row.get("title")?,
            notes: row.get("notes")?,
            photo_url: row.get("photoUrl")?,
        })
    }

    /// All entries ordered by ascending `entryId`.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT "entryId", "title", "notes", "photoUrl"
              FROM entries
             ORDER BY "entryId"
            "#,
        )?;
        let rows = stmt.query_map([], Self::entry_from_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        let conn = self.lock_conn()?;
        let entry = conn
            .query_row(
                r#"
                SELECT "entryId", "title", "notes", "photoUrl"
                  FROM entries
                 WHERE "entryId" = ?1
                "#,
                [id],
                Self::entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    /// Insert with a table-assigned identity.
    pub fn insert_entry(&self, fields: &EntryFields) -> Result<Entry> {
        fields.validate()?;
        let conn = self.lock_conn()?;
        let entry = conn.query_row(
            r#"
            INSERT INTO entries ("title", "notes", "photoUrl")
            VALUES (?1, ?2, ?3)
            RETURNING "entryId", "title", "notes", "photoUrl"
            "#,
            (&fields.title, &fields.notes, &fields.photo_url),
            Self::entry_from_row,
        )?;
        Ok(entry)
    }

    /// Insert with a caller-supplied identity.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Conflict` if the identity is already taken.
    pub fn insert_with_id(&self, entry: &Entry) -> Result<Entry> {
        let id = entry
            .entry_id
            .ok_or_else(|| JournalError::InvalidInput("entryId is required".to_string()))?;
        entry.validate()?;
        let conn = self.lock_conn()?;
        let result = conn.query_row(
            r#"
            INSERT INTO entries ("entryId", "title", "notes", "photoUrl")
            VALUES (?1, ?2, ?3, ?4)
            RETURNING "entryId", "title", "notes", "photoUrl"
            "#,
            (id, &entry.title, &entry.notes, &entry.photo_url),
            Self::entry_from_row,
        );
        match result {
            Ok(entry) => Ok(entry),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(JournalError::Conflict(format!("Entry {} already exists.", id)))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Replace the mutable fields of entry `id`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NotFound` if no row has that identity.
    pub fn update_entry(&self, id: EntryId, fields: &EntryFields) -> Result<Entry> {
        fields.validate()?;
        let conn = self.lock_conn()?;
        conn.query_row(
            r#"
            UPDATE entries
               SET "title" = ?1,
                   "notes" = ?2,
                   "photoUrl" = ?3
             WHERE "entryId" = ?4
            RETURNING "entryId", "title", "notes", "photoUrl"
            "#,
            (&fields.title, &fields.notes, &fields.photo_url, id),
            Self::entry_from_row,
        )
        .optional()?
        .ok_or_else(|| JournalError::NotFound(format!("Entry {} not found.", id)))
    }

    /// Delete entry `id`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NotFound` if no row has that identity.
    pub fn delete_entry(&self, id: EntryId) -> Result<()> {
        let conn = self.lock_conn()?;
        let deleted = conn.execute(r#"DELETE FROM entries WHERE "entryId" = ?1"#, [id])?;
        if deleted == 0 {
            return Err(JournalError::NotFound(format!("Entry {} not found.", id)));
        }
        Ok(())
    }

    /// Number of rows in the table.
    pub fn count(&self) -> Result<u64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }
}

impl EntryStore for SqliteStore {
    fn list(&self) -> Result<Vec<Entry>> {
        self.list_entries()
    }

    fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        self.get_entry(id)
    }

    fn create(&mut self, entry: &Entry) -> Result<Entry> {
        self.insert_entry(&entry.fields())
    }

    fn update(&mut self, entry: &Entry) -> Result<Entry> {
        let id = entry
            .entry_id
            .ok_or_else(|| JournalError::InvalidInput("entryId is required".to_string()))?;
        self.update_entry(id, &entry.fields())
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        self.delete_entry(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> EntryFields {
        Entry::new(title, "notes", "https://example.com/p.png").fields()
    }

    #[test]
    fn test_insert_then_get_matches() {
        let store = SqliteStore::open_in_memory().unwrap();
        let created = store.insert_entry(&fields("A")).unwrap();

        assert_eq!(created.entry_id, Some(1));
        assert_eq!(store.get_entry(1).unwrap(), Some(created));
    }

    #[test]
    fn test_list_is_ascending_by_id() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_with_id(&Entry::new("c", "n", "u").with_id(30)).unwrap();
        store.insert_with_id(&Entry::new("a", "n", "u").with_id(10)).unwrap();
        store.insert_with_id(&Entry::new("b", "n", "u").with_id(20)).unwrap();

        let ids: Vec<_> = store
            .list_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.entry_id.unwrap())
            .collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_entry(&fields("A")).unwrap();
        let second = store.insert_entry(&fields("B")).unwrap();
        store.delete_entry(second.entry_id.unwrap()).unwrap();

        let third = store.insert_entry(&fields("C")).unwrap();
        assert_eq!(third.entry_id, Some(3));
    }

    #[test]
    fn test_update_replaces_fields() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_entry(&fields("A")).unwrap();

        let updated = store.update_entry(1, &fields("B")).unwrap();

        assert_eq!(updated.entry_id, Some(1));
        assert_eq!(updated.title, "B");
        assert_eq!(store.get_entry(1).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_and_delete_missing_row_are_not_found() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(
            store.update_entry(999, &fields("A")),
            Err(JournalError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_entry(999),
            Err(JournalError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_supplied_id_is_conflict() {
        let store = SqliteStore::open_in_memory().unwrap();
        let entry = Entry::new("A", "n", "u").with_id(5);
        store.insert_with_id(&entry).unwrap();
        assert!(matches!(
            store.insert_with_id(&entry),
            Err(JournalError::Conflict(_))
        ));
    }

    #[test]
    fn test_values_are_bound_not_interpolated() {
        let store = SqliteStore::open_in_memory().unwrap();
        let hostile = r#"x"); DROP TABLE entries; --"#;
        let created = store
            .insert_entry(&Entry::new(hostile, "n", "u").fields())
            .unwrap();

        assert_eq!(created.title, hostile);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(
            store.insert_entry(&Entry::new("A", "n", "").fields()),
            Err(JournalError::Validation(_))
        ));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");
        SqliteStore::open(&path)
            .unwrap()
            .insert_entry(&fields("A"))
            .unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
    }
}

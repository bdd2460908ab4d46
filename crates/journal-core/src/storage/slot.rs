//! Key-value persistence slots.
//!
//! A slot stores one string value per key. The local store keeps its whole
//! state in a single slot entry, so a backend only needs whole-value reads
//! and writes.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{JournalError, Result};

/// A persistent string slot addressed by key.
pub trait KeyValueSlot: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was written yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory slot; contents vanish when dropped.
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| JournalError::Storage("memory slot poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| JournalError::Storage("memory slot poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed slot storing each key as `<dir>/<key>.json`.
///
/// Writes are atomic; a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Use `dir` as the slot directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(JournalError::InvalidInput(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(JournalError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            JournalError::Storage(format!(
                "Failed to create storage directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        crate::fs::write_atomic(&path, value.as_bytes()).map_err(|e| {
            JournalError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_slot_read_write() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read("k").unwrap(), None);

        slot.write("k", "v1").unwrap();
        slot.write("k", "v2").unwrap();

        assert_eq!(slot.read("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(slot.read("other").unwrap(), None);
    }

    #[test]
    fn test_file_slot_missing_key_reads_none() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"));

        assert_eq!(slot.read("code-journal-data").unwrap(), None);
        assert!(!slot.dir().exists());
    }

    #[test]
    fn test_file_slot_persists_across_instances() {
        let dir = tempdir().unwrap();
        FileSlot::new(dir.path()).write("k", "hello").unwrap();

        let reopened = FileSlot::new(dir.path());
        assert_eq!(reopened.read("k").unwrap().as_deref(), Some("hello"));
        assert!(dir.path().join("k.json").exists());
    }

    #[test]
    fn test_file_slot_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                slot.write(key, "x"),
                Err(JournalError::InvalidInput(_))
            ));
        }
    }
}

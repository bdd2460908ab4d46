//! Core data types for the storage layer.
//!
//! Field names on the wire are kept verbatim (`entryId`, `photoUrl`) so the
//! same JSON shape is shared by the local blob, the HTTP service and the
//! relational table columns.

use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};

/// Identity of a persisted entry.
pub type EntryId = i64;

/// Message used whenever a required entry field is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Entry requires all inputs";

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Assigned once at creation; absent for entries not yet persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<EntryId>,

    pub title: String,

    pub notes: String,

    /// Reference to an image resource (format is not validated)
    pub photo_url: String,
}

impl Entry {
    /// Build an unsaved entry.
    pub fn new(
        title: impl Into<String>,
        notes: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: None,
            title: title.into(),
            notes: notes.into(),
            photo_url: photo_url.into(),
        }
    }

    pub fn with_id(mut self, entry_id: EntryId) -> Self {
        self.entry_id = Some(entry_id);
        self
    }

    /// The mutable part of this entry.
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            title: self.title.clone(),
            notes: self.notes.clone(),
            photo_url: self.photo_url.clone(),
        }
    }

    /// Check that every required field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if title, notes or photo URL is empty.
    pub fn validate(&self) -> Result<()> {
        self.fields().validate()
    }
}

/// The replaceable fields of an entry, as sent in an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    pub title: String,
    pub notes: String,
    pub photo_url: String,
}

impl EntryFields {
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() || self.notes.is_empty() || self.photo_url.is_empty() {
            return Err(JournalError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Attach an identity, producing a complete entry.
    pub fn into_entry(self, entry_id: EntryId) -> Entry {
        Entry {
            entry_id: Some(entry_id),
            title: self.title,
            notes: self.notes,
            photo_url: self.photo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_wire_names() {
        let entry = Entry::new("A", "n", "u").with_id(7);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"entryId": 7, "title": "A", "notes": "n", "photoUrl": "u"})
        );
    }

    #[test]
    fn test_unsaved_entry_omits_id() {
        let entry = Entry::new("A", "n", "u");
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("entryId").is_none());
    }

    #[test]
    fn test_entry_accepts_null_or_missing_id() {
        let missing: Entry =
            serde_json::from_str(r#"{"title":"A","notes":"n","photoUrl":"u"}"#).unwrap();
        let null: Entry =
            serde_json::from_str(r#"{"entryId":null,"title":"A","notes":"n","photoUrl":"u"}"#)
                .unwrap();
        assert_eq!(missing.entry_id, None);
        assert_eq!(null, missing);
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(Entry::new("A", "n", "u").validate().is_ok());
        for entry in [
            Entry::new("", "n", "u"),
            Entry::new("A", "", "u"),
            Entry::new("A", "n", ""),
        ] {
            let err = entry.validate().unwrap_err();
            assert!(err.to_string().contains(MISSING_FIELDS_MESSAGE));
        }
    }

    #[test]
    fn test_fields_into_entry_keeps_values() {
        let fields = EntryFields {
            title: "t".to_string(),
            notes: "n".to_string(),
            photo_url: "p".to_string(),
        };
        let entry = fields.clone().into_entry(3);
        assert_eq!(entry.entry_id, Some(3));
        assert_eq!(entry.fields(), fields);
    }
}

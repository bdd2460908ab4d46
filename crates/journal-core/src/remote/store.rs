//! `EntryStore` adapter over the remote client.

use super::client::RemoteClient;
use crate::error::{JournalError, RemoteError, Result};
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, EntryId};

/// Entry store that forwards every operation to the HTTP service.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: RemoteClient,
}

impl RemoteStore {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    /// Connect to the service rooted at `base_url`.
    pub fn connect(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::new(RemoteClient::new(base_url)?))
    }
}

/// Map service-reported client errors back onto the core taxonomy.
fn into_journal_error(err: RemoteError) -> JournalError {
    let message = match &err {
        RemoteError::Status { message, .. } => message.clone(),
        _ => None,
    };
    match (err.status(), message) {
        (Some(400), Some(message)) => JournalError::InvalidInput(message),
        (Some(404), message) => {
            JournalError::NotFound(message.unwrap_or_else(|| "Entry not found.".to_string()))
        }
        (Some(409), Some(message)) => JournalError::Conflict(message),
        _ => JournalError::Remote(err),
    }
}

impl EntryStore for RemoteStore {
    fn list(&self) -> Result<Vec<Entry>> {
        self.client.list().map_err(into_journal_error)
    }

    fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        match self.client.get(id) {
            Ok(entry) => Ok(Some(entry)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(into_journal_error(err)),
        }
    }

    fn create(&mut self, entry: &Entry) -> Result<Entry> {
        entry.validate()?;
        self.client.create(entry).map_err(into_journal_error)
    }

    fn update(&mut self, entry: &Entry) -> Result<Entry> {
        if entry.entry_id.is_none() {
            return Err(JournalError::InvalidInput("entryId is required".to_string()));
        }
        entry.validate()?;
        self.client.update(entry).map_err(into_journal_error)
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        self.client.delete(id).map_err(into_journal_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_map_to_core_variants() {
        let not_found = into_journal_error(RemoteError::Status {
            status: 404,
            message: Some("Entry 9 not found.".to_string()),
        });
        assert!(matches!(not_found, JournalError::NotFound(ref m) if m == "Entry 9 not found."));

        let bad_id = into_journal_error(RemoteError::Status {
            status: 400,
            message: Some("entryId must be a number".to_string()),
        });
        assert!(matches!(bad_id, JournalError::InvalidInput(_)));

        let bare_404 = into_journal_error(RemoteError::Status {
            status: 404,
            message: None,
        });
        assert!(matches!(bare_404, JournalError::NotFound(_)));
    }

    #[test]
    fn test_server_and_transport_errors_stay_remote() {
        let server = into_journal_error(RemoteError::Status {
            status: 500,
            message: Some("an unexpected error occurred".to_string()),
        });
        assert!(matches!(server, JournalError::Remote(_)));

        let transport = into_journal_error(RemoteError::Transport("refused".to_string()));
        assert!(matches!(transport, JournalError::Remote(_)));
    }

    #[test]
    fn test_invalid_entries_never_leave_the_process() {
        let mut store = RemoteStore::connect("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            store.create(&Entry::new("", "n", "u")),
            Err(JournalError::Validation(_))
        ));
        assert!(matches!(
            store.update(&Entry::new("A", "n", "u")),
            Err(JournalError::InvalidInput(_))
        ));
    }
}

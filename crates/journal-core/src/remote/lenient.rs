//! Log-and-swallow facade over `RemoteClient`.
//!
//! Drop-in replacement for callers written against the old client, where
//! every failure became an absent value plus a log line and nothing ever
//! propagated. New code should use `RemoteClient` and inspect `RemoteError`.

use log::error;

use super::client::RemoteClient;
use crate::error::RemoteError;
use crate::storage::types::{Entry, EntryId};

/// `RemoteClient` whose operations never fail.
#[derive(Debug, Clone)]
pub struct LenientClient {
    inner: RemoteClient,
}

impl LenientClient {
    pub fn new(inner: RemoteClient) -> Self {
        Self { inner }
    }

    pub fn list(&self) -> Option<Vec<Entry>> {
        swallow("list entries", self.inner.list())
    }

    pub fn get(&self, id: EntryId) -> Option<Entry> {
        swallow(&format!("read entry {}", id), self.inner.get(id))
    }

    pub fn create(&self, entry: &Entry) -> Option<Entry> {
        swallow("add entry", self.inner.create(entry))
    }

    pub fn update(&self, entry: &Entry) -> Option<Entry> {
        swallow("update entry", self.inner.update(entry))
    }

    /// Delete, ignoring the outcome.
    pub fn delete(&self, id: EntryId) {
        swallow(&format!("remove entry {}", id), self.inner.delete(id));
    }
}

impl RemoteClient {
    /// Wrap this client in the log-and-swallow facade.
    pub fn lenient(self) -> LenientClient {
        LenientClient::new(self)
    }
}

fn swallow<T>(operation: &str, result: Result<T, RemoteError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!("Failed to {}: {}", operation, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_collapse_to_none() {
        let client = RemoteClient::new("http://127.0.0.1:9").unwrap().lenient();
        assert_eq!(client.list(), None);
        assert_eq!(client.get(1), None);
        assert_eq!(client.create(&Entry::new("A", "n", "u")), None);
        assert_eq!(client.update(&Entry::new("A", "n", "u")), None);
        client.delete(1);
    }

    #[test]
    fn test_swallow_passes_success_through() {
        assert_eq!(swallow("noop", Ok::<_, RemoteError>(3)), Some(3));
    }
}

//! Blocking HTTP client for the entry service.

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::RemoteError;
use crate::service::{ErrorBody, INVALID_ID_MESSAGE};
use crate::storage::types::{Entry, EntryId};

/// HTTP client for `/api/entries`.
///
/// Each call makes exactly one request. Failures are returned as a tagged
/// `RemoteError`; nothing is retried.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    base_url: String,
    client: Client,
}

impl RemoteClient {
    /// Create a client for the service rooted at `base_url`
    /// (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(concat!("journal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteError::Transport(format!("Failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/entries", self.base_url)
    }

    fn entry_url(&self, id: EntryId) -> String {
        format!("{}/api/entries/{}", self.base_url, id)
    }

    /// GET the collection, ascending by `entryId`.
    pub fn list(&self) -> Result<Vec<Entry>, RemoteError> {
        self.fetch_json(self.client.get(self.collection_url()))
    }

    pub fn get(&self, id: EntryId) -> Result<Entry, RemoteError> {
        self.fetch_json(self.client.get(self.entry_url(id)))
    }

    /// POST a new entry and return it as stored by the service.
    pub fn create(&self, entry: &Entry) -> Result<Entry, RemoteError> {
        self.fetch_json(self.client.post(self.collection_url()).json(entry))
    }

    /// PUT the mutable fields of `entry` to its identity.
    ///
    /// An entry without an identity is refused locally with the same 400 the
    /// service gives for an unparseable id.
    pub fn update(&self, entry: &Entry) -> Result<Entry, RemoteError> {
        let id = entry.entry_id.ok_or_else(|| RemoteError::Status {
            status: 400,
            message: Some(INVALID_ID_MESSAGE.to_string()),
        })?;
        self.fetch_json(self.client.put(self.entry_url(id)).json(&entry.fields()))
    }

    /// DELETE by identity; any response body is ignored.
    pub fn delete(&self, id: EntryId) -> Result<(), RemoteError> {
        self.send(self.client.delete(self.entry_url(id)))?;
        Ok(())
    }

    fn send(&self, request: RequestBuilder) -> Result<reqwest::blocking::Response, RemoteError> {
        let response = request
            .send()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            // The service explains client errors as {"error": "..."}.
            let message = response
                .text()
                .ok()
                .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                .map(|body| body.error);
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RemoteError> {
        let body = self
            .send(request)?
            .text()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

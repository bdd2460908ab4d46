//! REST/HTTP entry service
//!
//! Exposes the entry CRUD contract over JSON, backed by `SqliteStore`.
//!
//! | Method | Path                  | Success            |
//! |--------|-----------------------|--------------------|
//! | GET    | /api/entries          | 200, entry array   |
//! | GET    | /api/entries/:entryId | 200, entry         |
//! | POST   | /api/entries          | 201, created entry |
//! | PUT    | /api/entries/:entryId | 200, updated entry |
//! | DELETE | /api/entries/:entryId | 204, empty         |
//! | GET    | /api/health           | 200, health        |
//!
//! # Example
//!
//! ```ignore
//! use journal_core::service::{serve, ServiceConfig};
//!
//! serve(ServiceConfig::default()).await?;
//! ```

mod error;
mod handlers;

pub use error::{ApiError, ErrorBody, INTERNAL_ERROR_MESSAGE, REQUEST_ID_HEADER};
pub use handlers::*;

use std::fmt;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::info;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::error::{JournalError, Result};
use crate::storage::SqliteStore;

/// Who decides the identity of a created entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAssignment {
    /// The table assigns `entryId`; a body `entryId` is ignored
    #[default]
    Server,

    /// The body must carry a non-zero integer `entryId`
    Client,
}

impl fmt::Display for IdAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdAssignment::Server => write!(f, "server"),
            IdAssignment::Client => write!(f, "client"),
        }
    }
}

impl FromStr for IdAssignment {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(IdAssignment::Server),
            "client" => Ok(IdAssignment::Client),
            other => Err(format!(
                "Invalid id assignment: {} (use server or client)",
                other
            )),
        }
    }
}

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listen address
    pub address: SocketAddr,
    /// SQLite database file
    pub database_path: PathBuf,
    pub id_assignment: IdAssignment,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            database_path: PathBuf::from("journal.db"),
            id_assignment: IdAssignment::Server,
        }
    }
}

impl ServiceConfig {
    pub fn with_address(mut self, addr: SocketAddr) -> Self {
        self.address = addr;
        self
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn with_id_assignment(mut self, id_assignment: IdAssignment) -> Self {
        self.id_assignment = id_assignment;
        self
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SqliteStore>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(store: SqliteStore, config: ServiceConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/entries", get(list_entries).post(create_entry))
        .route(
            "/api/entries/:entry_id",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let request_id = tag_request_id(&mut response);
        info!("[{}] {} {} {}", request_id, method, path, status.as_u16());
    } else {
        info!("{} {} {}", method, path, status.as_u16());
    }
    response
}

/// Id of a failed response, reusing the one a 500 was logged under.
fn tag_request_id(response: &mut Response) -> String {
    if let Some(existing) = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        return existing.to_string();
    }
    let request_id = Uuid::new_v4().to_string();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    request_id
}

/// Open the configured database and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let store = SqliteStore::open(&config.database_path)?;
    let listener = TcpListener::bind(config.address)
        .await
        .map_err(|e| JournalError::Other(format!("Failed to bind {}: {}", config.address, e)))?;
    serve_on(listener, AppState::new(store, config), shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        "Entry service listening on http://{} (id assignment: {})",
        addr, state.config.id_assignment
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| JournalError::Other(format!("Server error: {}", e)))?;
    info!("Entry service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", err);
    }
}

// =============================================================================
// Tests
// =============================================================================

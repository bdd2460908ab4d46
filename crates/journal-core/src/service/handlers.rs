//! HTTP request handlers
//!
//! Axum handlers for `/api/entries`. Each one validates its input, runs one
//! statement against the entry table on the blocking pool, and answers with
//! JSON or an `ApiError`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;
use super::{AppState, IdAssignment};
use crate::error::JournalError;
use crate::storage::types::{Entry, EntryFields, EntryId, MISSING_FIELDS_MESSAGE};
use crate::storage::SqliteStore;

/// Message for a path or body identifier that is not an integer.
pub const INVALID_ID_MESSAGE: &str = "entryId must be a number";

/// Message for a client-assigned identity below 1.
pub const NON_POSITIVE_ID_MESSAGE: &str = "entryId must be a positive integer";

/// POST body. Every field is optional here so missing values produce the
/// service's own 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    /// `None` when the key is absent; an explicit `null` is `Some(Value::Null)`
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// PUT body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub entries: u64,
}

fn parse_entry_id(raw: &str) -> Result<EntryId, ApiError> {
    raw.parse::<EntryId>()
        .map_err(|_| ApiError::bad_request(INVALID_ID_MESSAGE))
}

/// Identity from a JSON body.
///
/// Integers and numeric strings are taken as-is. `null` and blank strings
/// count as `0`, which the caller reports as a missing input.
fn body_entry_id(value: Option<&serde_json::Value>) -> Result<EntryId, ApiError> {
    match value {
        Some(serde_json::Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| ApiError::bad_request(INVALID_ID_MESSAGE)),
        Some(serde_json::Value::String(raw)) if raw.trim().is_empty() => Ok(0),
        Some(serde_json::Value::String(raw)) => parse_entry_id(raw),
        Some(serde_json::Value::Null) => Ok(0),
        _ => Err(ApiError::bad_request(INVALID_ID_MESSAGE)),
    }
}

/// All three mutable fields, each present and non-empty.
fn required_fields(
    title: Option<String>,
    notes: Option<String>,
    photo_url: Option<String>,
) -> Result<EntryFields, ApiError> {
    match (title, notes, photo_url) {
        (Some(title), Some(notes), Some(photo_url)) => {
            let fields = EntryFields {
                title,
                notes,
                photo_url,
            };
            fields.validate()?;
            Ok(fields)
        }
        _ => Err(ApiError::bad_request(MISSING_FIELDS_MESSAGE)),
    }
}

fn not_found(id: EntryId) -> ApiError {
    ApiError::not_found(format!("Entry {} not found.", id))
}

/// Run a store call on the blocking pool; rusqlite calls block on the
/// connection mutex and on disk.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&SqliteStore) -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .map_err(|e| {
            ApiError::Internal(JournalError::Other(format!("Storage task failed: {}", e)))
        })?;
    Ok(result?)
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let entries = with_store(&state, |store| store.count()).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
    }))
}

/// List all entries, ascending by id
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, ApiError> {
    Ok(Json(with_store(&state, |store| store.list_entries()).await?))
}

/// Get an entry by id
pub async fn get_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_entry_id(&raw_id)?;
    let entry = with_store(&state, move |store| store.get_entry(id))
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(entry))
}

/// Create an entry
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let Json(payload) = payload?;

    let entry = match state.config.id_assignment {
        IdAssignment::Server => {
            let fields = required_fields(payload.title, payload.notes, payload.photo_url)?;
            with_store(&state, move |store| store.insert_entry(&fields)).await?
        }
        IdAssignment::Client => {
            let id = body_entry_id(payload.entry_id.as_ref())?;
            if id == 0 {
                return Err(ApiError::bad_request(MISSING_FIELDS_MESSAGE));
            }
            if id < 0 {
                return Err(ApiError::bad_request(NON_POSITIVE_ID_MESSAGE));
            }
            let entry = required_fields(payload.title, payload.notes, payload.photo_url)?
                .into_entry(id);
            with_store(&state, move |store| store.insert_with_id(&entry)).await?
        }
    };

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Replace the mutable fields of an entry
pub async fn update_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_entry_id(&raw_id)?;
    let Json(payload) = payload?;
    let fields = required_fields(payload.title, payload.notes, payload.photo_url)?;

    let entry = with_store(&state, move |store| store.update_entry(id, &fields)).await?;
    Ok(Json(entry))
}

/// Delete an entry
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_entry_id(&raw_id)?;
    with_store(&state, move |store| store.delete_entry(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Tests
// =============================================================================

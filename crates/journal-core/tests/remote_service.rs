use journal_core::remote::{RemoteClient, RemoteStore};
use journal_core::service::{ErrorBody, HealthResponse, IdAssignment, REQUEST_ID_HEADER};
use journal_core::{Entry, EntryStore, JournalError, RemoteError};

mod common;

use common::spawn_service;

fn raw() -> reqwest::blocking::Client {
    reqwest::blocking::Client::new()
}

#[test]
fn test_create_then_get_matches_on_all_fields() {
    let base = spawn_service(IdAssignment::Server);
    let client = RemoteClient::new(&base).expect("client");

    let created = client
        .create(&Entry::new("A", "n", "u"))
        .expect("create should succeed");
    assert_eq!(created, Entry::new("A", "n", "u").with_id(1));

    let fetched = client.get(1).expect("get should succeed");
    assert_eq!(fetched, created);
}

#[test]
fn test_list_is_ascending_regardless_of_creation_order() {
    let base = spawn_service(IdAssignment::Client);
    let client = RemoteClient::new(&base).expect("client");

    for id in [30, 10, 20] {
        client
            .create(&Entry::new(format!("t{}", id), "n", "u").with_id(id))
            .expect("create should succeed");
    }

    let ids: Vec<_> = client
        .list()
        .expect("list should succeed")
        .into_iter()
        .map(|entry| entry.entry_id.expect("stored entries have ids"))
        .collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_update_replaces_fields_and_keeps_id() {
    let base = spawn_service(IdAssignment::Server);
    let client = RemoteClient::new(&base).expect("client");
    let created = client.create(&Entry::new("A", "n", "u")).expect("create");

    let replacement = Entry::new("B", "n2", "u2").with_id(created.entry_id.unwrap());
    let updated = client.update(&replacement).expect("update should succeed");

    assert_eq!(updated, replacement);
    assert_eq!(client.get(1).expect("get"), replacement);
}

#[test]
fn test_non_integer_id_is_400_with_message() {
    let base = spawn_service(IdAssignment::Server);

    let response = raw()
        .get(format!("{}/api/entries/abc", base))
        .send()
        .expect("request should be sent");
    assert_eq!(response.status().as_u16(), 400);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    let body: ErrorBody = response.json().expect("error body");
    assert!(body.error.contains("entryId must be a number"));
}

#[test]
fn test_put_against_empty_table_is_404() {
    let base = spawn_service(IdAssignment::Server);

    let response = raw()
        .put(format!("{}/api/entries/999", base))
        .json(&serde_json::json!({"title": "t", "notes": "n", "photoUrl": "u"}))
        .send()
        .expect("request should be sent");
    assert_eq!(response.status().as_u16(), 404);
}

#[test]
fn test_delete_is_204_then_get_is_404() {
    let base = spawn_service(IdAssignment::Server);
    let client = RemoteClient::new(&base).expect("client");
    client.create(&Entry::new("A", "n", "u")).expect("create");

    let response = raw()
        .delete(format!("{}/api/entries/1", base))
        .send()
        .expect("request should be sent");
    assert_eq!(response.status().as_u16(), 204);
    assert!(response.text().expect("body").is_empty());

    let err = client.get(1).expect_err("entry should be gone");
    assert!(err.is_not_found());

    let err = client.delete(1).expect_err("second delete should fail");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn test_create_with_missing_fields_is_400() {
    let base = spawn_service(IdAssignment::Server);

    let response = raw()
        .post(format!("{}/api/entries", base))
        .json(&serde_json::json!({"title": "t", "notes": ""}))
        .send()
        .expect("request should be sent");
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorBody = response.json().expect("error body");
    assert_eq!(body.error, "Entry requires all inputs");
}

#[test]
fn test_malformed_json_is_400() {
    let base = spawn_service(IdAssignment::Server);

    let response = raw()
        .post(format!("{}/api/entries", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .expect("request should be sent");
    assert_eq!(response.status().as_u16(), 400);
}

#[test]
fn test_client_reports_status_and_message() {
    let base = spawn_service(IdAssignment::Server);
    let client = RemoteClient::new(&base).expect("client");

    let err = client.get(42).expect_err("missing entry");
    assert_eq!(
        err,
        RemoteError::Status {
            status: 404,
            message: Some("Entry 42 not found.".to_string()),
        }
    );
}

#[test]
fn test_lenient_client_swallows_failures() {
    let base = spawn_service(IdAssignment::Server);
    let client = RemoteClient::new(&base).expect("client").lenient();

    assert_eq!(client.get(1), None);
    assert_eq!(client.update(&Entry::new("A", "n", "u").with_id(1)), None);
    client.delete(1);

    let created = client.create(&Entry::new("A", "n", "u"));
    assert_eq!(created.as_ref().and_then(|e| e.entry_id), Some(1));
    assert_eq!(client.list().map(|entries| entries.len()), Some(1));
}

#[test]
fn test_remote_store_follows_entry_store_contract() {
    let base = spawn_service(IdAssignment::Server);
    let mut store = RemoteStore::connect(&base).expect("store");

    let created = store.create(&Entry::new("A", "n", "u")).expect("create");
    let id = created.entry_id.expect("assigned id");
    assert_eq!(store.get(id).expect("get"), Some(created));

    store
        .update(&Entry::new("B", "n", "u").with_id(id))
        .expect("update");
    assert_eq!(store.list().expect("list")[0].title, "B");

    store.delete(id).expect("delete");
    assert_eq!(store.get(id).expect("get after delete"), None);
    assert!(matches!(store.delete(id), Err(JournalError::NotFound(_))));
}

#[test]
fn test_health_reports_entry_count() {
    let base = spawn_service(IdAssignment::Server);
    let client = RemoteClient::new(&base).expect("client");
    client.create(&Entry::new("A", "n", "u")).expect("create");

    let health: HealthResponse = raw()
        .get(format!("{}/api/health", base))
        .send()
        .expect("request should be sent")
        .json()
        .expect("health body");
    assert_eq!(health.status, "ok");
    assert_eq!(health.entries, 1);
}

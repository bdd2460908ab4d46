use std::net::TcpListener;

use journal_core::service::{serve_on, AppState, IdAssignment, ServiceConfig};
use journal_core::storage::SqliteStore;

/// Start the entry service on an ephemeral port with a fresh in-memory
/// database and return its base URL. The server lives until the test
/// process exits.
pub fn spawn_service(id_assignment: IdAssignment) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    listener
        .set_nonblocking(true)
        .expect("set listener nonblocking");
    let addr = listener.local_addr().expect("listener address");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("convert test listener");
            let store = SqliteStore::open_in_memory().expect("open test database");
            let config = ServiceConfig::default()
                .with_address(addr)
                .with_id_assignment(id_assignment);
            serve_on(
                listener,
                AppState::new(store, config),
                std::future::pending::<()>(),
            )
            .await
            .expect("serve entries");
        });
    });

    format!("http://{}", addr)
}

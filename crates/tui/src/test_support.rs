//! Servers for exercising the view and client over real HTTP.

use std::sync::{Arc, Mutex};

use api_types::record::Record;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use server::RecordStore;
use tokio::net::TcpListener;

/// Spawns the real record service backed by a fresh temporary file.
///
/// Returns the base URL (with trailing slash) and the directory guard.
pub async fn spawn_record_service() -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let store = RecordStore::new(dir.path().join("records.json"));
    let addr = server::spawn_with_listener(store, listener).unwrap();
    (format!("http://{addr}/"), dir)
}

/// A URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: Method,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum StubMode {
    #[default]
    Ok,
    /// Every create answers 500 without storing anything.
    FailCreate,
    /// Every list answers 200 with a body that is not a record array.
    GarbageList,
}

#[derive(Clone, Default)]
pub struct Stub {
    mode: StubMode,
    records: Arc<Mutex<Vec<Record>>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl Stub {
    /// Requests received on `/records`, in arrival order.
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.seen().into_iter().map(|req| req.method).collect()
    }

    pub fn push_record(&self, record: Record) {
        self.records.lock().unwrap().push(record);
    }
}

async fn stub_list(State(stub): State<Stub>) -> Response {
    stub.seen.lock().unwrap().push(SeenRequest {
        method: Method::GET,
        body: None,
    });
    match stub.mode {
        StubMode::GarbageList => "<html>oops</html>".into_response(),
        _ => Json(stub.records.lock().unwrap().clone()).into_response(),
    }
}

async fn stub_create(State(stub): State<Stub>, body: Bytes) -> StatusCode {
    let value: Option<Value> = serde_json::from_slice(&body).ok();
    stub.seen.lock().unwrap().push(SeenRequest {
        method: Method::POST,
        body: value.clone(),
    });
    if matches!(stub.mode, StubMode::FailCreate) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    if let Some(record) = value.and_then(|v| serde_json::from_value::<Record>(v).ok()) {
        stub.records.lock().unwrap().push(record);
    }
    StatusCode::CREATED
}

/// Spawns a `/records` stub that records every request it receives.
pub async fn spawn_stub(mode: StubMode, initial: Vec<Record>) -> (String, Stub) {
    let stub = Stub {
        mode,
        records: Arc::new(Mutex::new(initial)),
        seen: Arc::default(),
    };
    let router = Router::new()
        .route("/records", get(stub_list).post(stub_create))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}/"), stub)
}

//! Stub `/api/register` server for tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::Value;

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(StatusCode, Value),
    Text(&'static str),
    NoContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Stub {
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub(crate) struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub mutex should lock").clone()
    }
}

async fn handle(State(stub): State<Stub>, headers: HeaderMap, body: String) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    stub.requests
        .lock()
        .expect("stub mutex should lock")
        .push(RecordedRequest { content_type, body });

    match stub.reply {
        Reply::Json(status, value) => (status, axum::Json(value)).into_response(),
        Reply::Text(text) => text.into_response(),
        Reply::NoContent => StatusCode::NO_CONTENT.into_response(),
    }
}

pub(crate) async fn spawn_stub(reply: Reply) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/register", post(handle))
        .with_state(Stub { reply, requests: requests.clone() });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().expect("stub should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubServer { base_url: format!("http://{addr}"), requests }
}

/// Base URL on a port nothing is listening on.
pub(crate) async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("probe should bind");
    let addr = listener.local_addr().expect("probe should have an address");
    drop(listener);
    format!("http://{addr}")
}

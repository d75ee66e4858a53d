//! Mock summarization service.
//!
//! Answers `POST /summarize` from a queue of scripted replies and keeps every
//! request it saw. Any other path gets a 404 that is also recorded, so a
//! wrong endpoint shows up in `captured_requests`.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// What the service received.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// A scripted reply.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::summary("default summary")
    }
}

impl MockResponse {
    /// `200 {"summary": text}`
    pub fn summary(text: &str) -> Self {
        Self::json(&serde_json::json!({ "summary": text }).to_string())
    }

    /// `200` with a raw JSON body, valid or not.
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    /// Error status with a FastAPI-style `{"detail": ...}` body.
    pub fn error(status: u16, detail: &str) -> Self {
        Self {
            status,
            ..Self::json(&serde_json::json!({ "detail": detail }).to_string())
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

#[derive(Clone, Default)]
struct Script {
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

impl Script {
    async fn record(&self, method: &Method, uri: &Uri, body: &[u8]) {
        self.seen.lock().await.push(CapturedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            body: body.to_vec(),
        });
    }
}

/// A summarization service on an ephemeral localhost port.
pub struct MockService {
    pub addr: SocketAddr,
    script: Script,
    stop: watch::Sender<bool>,
}

impl MockService {
    pub async fn start() -> Self {
        let script = Script::default();
        let (stop, mut stopped) = watch::channel(false);

        let app = Router::new()
            .route("/summarize", post(summarize))
            .fallback(not_found)
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await;
        });

        Self { addr, script, stop }
    }

    /// Queue the reply for the next `/summarize` call.
    pub async fn enqueue_response(&self, reply: MockResponse) {
        self.script.replies.lock().await.push_back(reply);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.seen.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn summarize(State(script): State<Script>, method: Method, uri: Uri, body: Bytes) -> MockResponse {
    script.record(&method, &uri, &body).await;

    let reply = script.replies.lock().await.pop_front().unwrap_or_default();
    if reply.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(reply.delay_ms)).await;
    }
    reply
}

async fn not_found(State(script): State<Script>, method: Method, uri: Uri, body: Bytes) -> StatusCode {
    script.record(&method, &uri, &body).await;
    StatusCode::NOT_FOUND
}

//! In-process stand-in for the analysis API.
//!
//! Each test spawns its own axum server on a random port. The server records
//! every multipart upload it receives so tests can inspect the wire format.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use pictune_core::PhotoFile;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01";

/// One part as seen by the server.
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// How the fake API answers.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Behavior {
    /// 200 with the given JSON body
    Ok(serde_json::Value),
    /// Given status with the given raw body
    Status(u16, String),
    /// Sleep before answering 200
    Hang(Duration),
}

#[derive(Clone)]
struct AppState {
    behavior: Behavior,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

/// Handle to a running fake API.
pub struct FakeApi {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
    task: tokio::task::JoinHandle<()>,
}

impl FakeApi {
    pub async fn spawn(behavior: Behavior) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = AppState {
            behavior,
            received: received.clone(),
        };
        let app = Router::new()
            .route("/api/analyze-photo", post(analyze))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to read local address")
            .port();

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake API crashed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            received,
            task,
        }
    }

    /// Parts received so far.
    pub fn received(&self) -> Vec<ReceivedPart> {
        self.received.lock().expect("poisoned").clone()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn analyze(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        state.received.lock().expect("poisoned").push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    match state.behavior {
        Behavior::Ok(body) => Json(body).into_response(),
        Behavior::Status(code, body) => (
            StatusCode::from_u16(code).expect("valid status"),
            body,
        )
            .into_response(),
        Behavior::Hang(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({"mood": "Late", "songs": []})).into_response()
        }
    }
}

pub fn happy_body() -> serde_json::Value {
    json!({
        "mood": "Happy",
        "songs": [
            {"title": "A", "artist": "B", "language": "Hindi"},
            {
                "title": "C",
                "artist": "D",
                "language": "English",
                "genre": "Pop",
                "audioFeatures": {"tempo": 128.0, "energy": 0.8, "valence": 0.9, "match_score": 0.95}
            }
        ]
    })
}

pub fn sample_photo() -> PhotoFile {
    PhotoFile::from_bytes("beach.png", PNG_HEADER.to_vec())
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener.local_addr().expect("local address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

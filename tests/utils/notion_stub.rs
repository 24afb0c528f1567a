/// Local stand-in for the Notion database query endpoint
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub database_id: String,
    pub authorization: Option<String>,
    pub notion_version: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct NotionStub {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl NotionStub {
    /// Serve `body` with `status` for every query on an ephemeral port
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            captured: captured.clone(),
        };

        let app = Router::new()
            .route("/v1/databases/{database_id}/query", post(query_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn query_handler(
    State(state): State<StubState>,
    Path(database_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_text = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.captured.lock().unwrap().push(CapturedRequest {
        database_id,
        authorization: header_text("authorization"),
        notion_version: header_text("notion-version"),
        content_type: header_text("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Address with nothing listening on it
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

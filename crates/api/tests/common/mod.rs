//! Shared test harness for the API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use formaflow_api::config::ServerConfig;
use formaflow_api::router::build_app_router;
use formaflow_api::sessions::SessionRegistry;
use formaflow_api::state::AppState;
use formaflow_instagram::{InstagramClient, InstagramConfig};
use formaflow_storage::ObjectStore;

/// Build a test `ServerConfig` with safe defaults: wide-open CORS (the
/// production default), zero analysis delay, and a per-test storage root.
pub fn test_config(storage_root: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        storage_root: storage_root.to_string(),
        public_base_url: "http://localhost:3000".to_string(),
        analysis_delay_ms: 0,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Each call gets its own object
/// store root so upload tests cannot see each other's files.
pub fn build_test_app(pool: PgPool) -> Router {
    let dir = tempfile::tempdir().expect("create storage tempdir");
    let storage_root = dir.path().display().to_string();
    // Keep the directory alive for the rest of the test process.
    std::mem::forget(dir);

    let config = test_config(&storage_root);
    let store = ObjectStore::new(storage_root, config.public_base_url.clone());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::new(store),
        // No credentials: the client serves the canned demo dataset.
        instagram: Arc::new(InstagramClient::new(InstagramConfig::default())),
        sessions: Arc::new(SessionRegistry::new()),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with an empty body.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Start a demo session and return its PIN.
pub async fn start_session(app: Router) -> String {
    let response = post_empty(app, "/api/v1/session").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["pin"].as_str().unwrap().to_string()
}

/// One part of a multipart request body.
pub struct Part<'a> {
    pub name: &'a str,
    /// `Some(file_name)` for file parts, `None` for text parts.
    pub file_name: Option<&'a str>,
    pub content: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn text(name: &'a str, content: &'a str) -> Self {
        Self {
            name,
            file_name: None,
            content: content.as_bytes(),
        }
    }

    pub fn file(name: &'a str, file_name: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            content,
        }
    }
}

const BOUNDARY: &str = "formaflow-test-boundary";

/// Encode parts into a `multipart/form-data` body.
pub fn multipart_body(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n",
                    part.name, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                    .as_bytes(),
            ),
        }
        body.extend_from_slice(part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// Issue a POST request with a multipart body.
pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let (content_type, body) = multipart_body(parts);
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

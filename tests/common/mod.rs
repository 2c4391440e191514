// SPDX-License-Identifier: MIT

use lead_gate::config::Config;
use lead_gate::routes::create_router;
use lead_gate::store::MemoryStore;
use lead_gate::AppState;
use std::sync::Arc;

/// Create a test app over an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config::test_default())
}

/// Create a test app with a custom config (e.g. pointing the ebook file at
/// a temp fixture).
#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config,
        store: Arc::new(MemoryStore::new()),
    });

    (create_router(state.clone()), state)
}

/// POST a JSON body and return the response.
#[allow(dead_code)]
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> axum::http::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// GET a path and return the response.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> axum::http::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn json_body(response: axum::http::Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

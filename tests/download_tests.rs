// SPDX-License-Identifier: MIT

//! End-to-end download gate tests: signup, then fetch the ebook with the
//! returned token.

use axum::http::{header, StatusCode};
use lead_gate::config::Config;
use serde_json::json;

mod common;

use common::{create_test_app_with_config, get, json_body, post_json};

const EBOOK_BYTES: &[u8] = b"%PDF-1.4 fake ebook payload";

/// Test app whose ebook file points at a real temp fixture.
/// The TempDir must stay alive for the duration of the test.
fn app_with_ebook() -> (axum::Router, std::sync::Arc<lead_gate::AppState>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let ebook_path = dir.path().join("ebook.pdf");
    std::fs::write(&ebook_path, EBOOK_BYTES).unwrap();

    let config = Config {
        ebook_file: ebook_path,
        ..Config::test_default()
    };
    let (app, state) = create_test_app_with_config(config);
    (app, state, dir)
}

#[tokio::test]
async fn test_signup_then_download() {
    let (app, _, _dir) = app_with_ebook();

    let response = post_json(
        app.clone(),
        "/api/signup",
        json!({"email": "user@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = json_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let download = get(app, &format!("/api/ebook/{}", token)).await;
    assert_eq!(download.status(), StatusCode::OK);
    assert_eq!(
        download.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        download.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"ebook.pdf\""
    );

    let body = axum::body::to_bytes(download.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], EBOOK_BYTES);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let (app, _, _dir) = app_with_ebook();

    let response = get(app, "/api/ebook/garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_token_signed_with_other_key_is_unauthorized() {
    let (app, _, _dir) = app_with_ebook();

    let forged =
        lead_gate::services::tokens::issue("user@example.com", b"some_other_key_entirely!!!!!!!!")
            .unwrap();

    let response = get(app, &format!("/api/ebook/{}", forged)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_ebook_file_is_not_found() {
    // Valid token, but the configured ebook file does not exist: operators
    // must be able to tell this apart from a bad token.
    let (app, state) = create_test_app_with_config(Config {
        ebook_file: "/nonexistent/ebook.pdf".into(),
        ..Config::test_default()
    });

    let token =
        lead_gate::services::tokens::issue("user@example.com", &state.config.jwt_secret).unwrap();

    let response = get(app, &format!("/api/ebook/{}", token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
}

// SPDX-License-Identifier: MIT

//! The token-gated ebook download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::services::tokens;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/ebook/{token}", get(download_ebook))
}

/// Verify the path-embedded token and release the ebook.
async fn download_ebook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Response> {
    let claims =
        tokens::verify(&token, &state.config.jwt_secret).ok_or(AppError::InvalidToken)?;

    tracing::info!(email = %claims.email, "Ebook download requested");

    let path = &state.config.ebook_file;

    // Distinguish a missing file (misconfigured deployment) from a bad
    // token before touching the contents.
    if tokio::fs::metadata(path).await.is_err() {
        return Err(AppError::EbookMissing(path.display().to_string()));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to read ebook file: {}", e)))?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("ebook.pdf");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, bytes).into_response())
}

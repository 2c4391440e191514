// SPDX-License-Identifier: MIT

//! Signup routes: the two capture variants.
//!
//! `POST /api/signup` takes an email (plus optional build tag) and answers
//! with an access token for the download gate. `POST /api/submit` is the
//! full-capture variant (name + consent) and answers with a redirect target
//! instead; that page is reached only via the returned path, a deliberately
//! weaker, navigation-based gate.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::services::leads::{register, LeadCandidate, Registration};
use crate::services::tokens;
use crate::AppState;

/// Where the full-capture variant sends a registered lead.
const GATED_PAGE: &str = "/view_pdf.html";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/submit", post(submit))
}

// ─── Signup variant (token gate) ─────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    build: Option<String>,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    let candidate = LeadCandidate::from_signup(req.email, req.build)?;
    let email = candidate.email.clone();

    let registration = register(state.store.as_ref(), candidate).await?;

    // A fresh token is minted on every successful call, re-identification
    // included.
    let token = tokens::issue(&email, &state.config.jwt_secret)?;

    let message = match registration {
        Registration::New => "Signup successful!",
        Registration::WelcomeBack => "Welcome back!",
    };

    Ok(Json(SignupResponse {
        success: true,
        message: message.to_string(),
        token,
    }))
}

// ─── Full-capture variant (redirect gate) ────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    consent: bool,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub redirect: String,
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>> {
    let candidate =
        LeadCandidate::from_submit(req.first_name, req.last_name, req.email, req.consent)?;

    let registration = register(state.store.as_ref(), candidate).await?;

    let message = match registration {
        Registration::New => "Success!",
        Registration::WelcomeBack => "Welcome back!",
    };

    Ok(Json(SubmitResponse {
        success: true,
        message: message.to_string(),
        redirect: GATED_PAGE.to_string(),
    }))
}

// SPDX-License-Identifier: MIT

//! Read-only listing routes for the registered leads.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{EmailEntry, LeadRecord};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/emails", get(list_emails))
        .route("/api/users", get(list_users))
}

#[derive(Serialize)]
pub struct EmailsResponse {
    pub success: bool,
    pub count: usize,
    pub emails: Vec<EmailEntry>,
}

/// Emails and registration times only, other fields stripped.
async fn list_emails(State(state): State<Arc<AppState>>) -> Result<Json<EmailsResponse>> {
    let records = state.store.list_all().await?;
    let emails: Vec<EmailEntry> = records.iter().map(EmailEntry::from).collect();

    Ok(Json(EmailsResponse {
        success: true,
        count: emails.len(),
        emails,
    }))
}

/// Full records, as stored.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LeadRecord>>> {
    Ok(Json(state.store.list_all().await?))
}

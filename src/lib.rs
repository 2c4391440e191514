// SPDX-License-Identifier: MIT

//! Lead-Gate: signup and gated ebook download backend.
//!
//! A form submission is validated and durably recorded (deduplicated by
//! email), and a signed, time-limited token gates a single file download.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use store::LeadStoreHandle;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: LeadStoreHandle,
}

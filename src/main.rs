// SPDX-License-Identifier: MIT

//! Lead-Gate API Server
//!
//! Captures signup leads and gates a single ebook download behind a signed,
//! time-limited access token.

use lead_gate::{
    config::Config,
    store::{JsonFileStore, LeadStoreHandle, MongoStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Lead-Gate API");

    if config.jwt_secret_is_default {
        tracing::warn!(
            "JWT_SECRET not set, using the development default. \
             Every issued token is forgeable; set JWT_SECRET in production."
        );
    }

    // Pick the store backend: MongoDB when a URI is configured, the flat
    // JSON file otherwise.
    let store: LeadStoreHandle = match &config.mongodb_uri {
        Some(uri) => {
            let store = MongoStore::new(uri, &config.mongodb_db)
                .await
                .expect("Failed to connect to MongoDB");
            Arc::new(store)
        }
        None => {
            tracing::info!(path = %config.leads_file.display(), "Using flat-file lead store");
            Arc::new(JsonFileStore::new(config.leads_file.clone()))
        }
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = lead_gate::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install SIGINT handler");
    };

    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lead_gate=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

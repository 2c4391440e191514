//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup into an owned `Config`; handlers only
//! ever see the frozen copy inside `AppState`.

use std::env;
use std::path::PathBuf;

/// Development fallback for the signing secret. Using it in production makes
/// every issued token forgeable, so startup logs a loud warning.
pub const DEFAULT_JWT_SECRET: &str = "change-me-lead-gate-dev-secret";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// JWT signing key for access tokens (raw bytes)
    pub jwt_secret: Vec<u8>,
    /// Whether the signing key fell back to the development default
    pub jwt_secret_is_default: bool,
    /// Flat-file lead store location (used when no MongoDB URI is set)
    pub leads_file: PathBuf,
    /// MongoDB connection string; selects the database backend when set
    pub mongodb_uri: Option<String>,
    /// MongoDB database name
    pub mongodb_db: String,
    /// The gated ebook file
    pub ebook_file: PathBuf,
    /// Frontend URL for CORS
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables (`.env` honored).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let (jwt_secret, jwt_secret_is_default) = match env::var("JWT_SECRET") {
            Ok(v) if !v.trim().is_empty() => (v.trim().to_string().into_bytes(), false),
            _ => (DEFAULT_JWT_SECRET.as_bytes().to_vec(), true),
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            jwt_secret,
            jwt_secret_is_default,
            leads_file: env::var("LEADS_FILE")
                .unwrap_or_else(|_| "data/emails.json".to_string())
                .into(),
            mongodb_uri: env::var("MONGODB_URI").ok().filter(|v| !v.is_empty()),
            mongodb_db: env::var("MONGODB_DB").unwrap_or_else(|_| "lead_gate".to_string()),
            ebook_file: env::var("EBOOK_FILE")
                .unwrap_or_else(|_| "data/ebook.pdf".to_string())
                .into(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }

    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            port: 3000,
            jwt_secret: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
            jwt_secret_is_default: false,
            leads_file: "data/emails.json".into(),
            mongodb_uri: None,
            mongodb_db: "lead_gate_test".to_string(),
            ebook_file: "data/ebook.pdf".into(),
            frontend_url: "http://localhost:5173".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

//! Lead model for storage and API.

use serde::{Deserialize, Serialize};

/// A captured lead, one per unique email.
///
/// Serialized camelCase to match the on-disk JSON array produced by the
/// flat-file backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Unique key, case-sensitive as submitted
    pub email: String,
    /// First name (full-capture variant only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name (full-capture variant only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Explicit opt-in; always true for full-capture records
    #[serde(default)]
    pub consent: bool,
    /// RFC 3339 timestamp, set at creation and never mutated
    pub registered_at: String,
    /// Informational client-build tag
    #[serde(default = "default_build")]
    pub build: String,
}

fn default_build() -> String {
    "unknown".to_string()
}

/// A stripped listing entry: email and registration time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntry {
    pub email: String,
    pub registered_at: String,
}

impl From<&LeadRecord> for EmailEntry {
    fn from(record: &LeadRecord) -> Self {
        Self {
            email: record.email.clone(),
            registered_at: record.registered_at.clone(),
        }
    }
}

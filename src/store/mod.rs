//! Lead store abstraction and backends.
//!
//! Handlers only see the `LeadStore` capability; the backend (flat JSON
//! file, MongoDB, or in-memory for tests) is chosen once at startup.

pub mod json_file;
pub mod memory;
pub mod mongo;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::LeadRecord;

/// Outcome of an insert attempt.
///
/// Backends that can detect a duplicate-email conflict (unique index, or the
/// in-memory mutex) report it here rather than as an error, so the caller can
/// fold it into the "already registered" success path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyRegistered,
}

/// Capability interface over the persistent lead collection.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Look up a lead by exact, case-sensitive email match.
    async fn find(&self, email: &str) -> Result<Option<LeadRecord>, AppError>;

    /// Insert a new lead.
    async fn insert(&self, record: LeadRecord) -> Result<InsertOutcome, AppError>;

    /// All stored leads, in insertion order where the backend preserves it.
    async fn list_all(&self) -> Result<Vec<LeadRecord>, AppError>;
}

pub type LeadStoreHandle = Arc<dyn LeadStore>;

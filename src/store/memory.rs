//! In-memory lead store for tests and offline runs.
//!
//! Unlike the flat-file backend, inserts are serialized by a mutex, so this
//! backend behaves like the database backend with respect to duplicates.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::LeadRecord;
use crate::store::{InsertOutcome, LeadStore};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<LeadRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadStore for MemoryStore {
    async fn find(&self, email: &str) -> Result<Option<LeadRecord>, AppError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.email == email).cloned())
    }

    async fn insert(&self, record: LeadRecord) -> Result<InsertOutcome, AppError> {
        let mut records = self.records.lock().await;
        if records.iter().any(|r| r.email == record.email) {
            return Ok(InsertOutcome::AlreadyRegistered);
        }
        records.push(record);
        Ok(InsertOutcome::Inserted)
    }

    async fn list_all(&self) -> Result<Vec<LeadRecord>, AppError> {
        Ok(self.records.lock().await.clone())
    }
}

//! Flat-file lead store: a single pretty-printed JSON array.
//!
//! Insert is a read-modify-write over the whole file and is NOT atomic:
//! two concurrent first-time signups can interleave, and the later rewrite
//! drops the earlier insert (last writer wins). This is a documented
//! limitation of the flat-file backend; the MongoDB backend closes the gap
//! with a unique index.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::LeadRecord;
use crate::store::{InsertOutcome, LeadStore};

/// Lead store backed by a JSON array file.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file. A missing file reads as an empty collection.
    pub(crate) async fn read_all(&self) -> Result<Vec<LeadRecord>, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| AppError::Storage(format!("corrupt lead file: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Storage(format!("failed to read lead file: {}", e))),
        }
    }

    /// Rewrite the whole file, creating parent directories on first write.
    pub(crate) async fn write_all(&self, records: &[LeadRecord]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::Storage(format!("failed to create data dir: {}", e)))?;
            }
        }

        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| AppError::Storage(format!("failed to serialize leads: {}", e)))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::Storage(format!("failed to write lead file: {}", e)))
    }
}

#[async_trait]
impl LeadStore for JsonFileStore {
    async fn find(&self, email: &str) -> Result<Option<LeadRecord>, AppError> {
        let records = self.read_all().await?;
        Ok(records.into_iter().find(|r| r.email == email))
    }

    async fn insert(&self, record: LeadRecord) -> Result<InsertOutcome, AppError> {
        let mut records = self.read_all().await?;

        // Re-check under this call's snapshot. Two concurrent inserts can
        // still both pass this check; see the module docs.
        if records.iter().any(|r| r.email == record.email) {
            return Ok(InsertOutcome::AlreadyRegistered);
        }

        records.push(record);
        self.write_all(&records).await?;
        Ok(InsertOutcome::Inserted)
    }

    async fn list_all(&self) -> Result<Vec<LeadRecord>, AppError> {
        self.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> LeadRecord {
        LeadRecord {
            email: email.to_string(),
            first_name: None,
            last_name: None,
            consent: false,
            registered_at: "2026-08-24T00:00:00Z".to_string(),
            build: "unknown".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("emails.json"));

        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.find("a@b.co").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_then_find_roundtrips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emails.json");

        let store = JsonFileStore::new(&path);
        assert_eq!(
            store.insert(record("a@b.co")).await.unwrap(),
            InsertOutcome::Inserted
        );

        // A fresh handle over the same file sees the persisted record.
        let reopened = JsonFileStore::new(&path);
        let found = reopened.find("a@b.co").await.unwrap().unwrap();
        assert_eq!(found.email, "a@b.co");
        assert_eq!(found.build, "unknown");
    }

    #[tokio::test]
    async fn duplicate_insert_within_one_snapshot_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("emails.json"));

        store.insert(record("a@b.co")).await.unwrap();
        assert_eq!(
            store.insert(record("a@b.co")).await.unwrap(),
            InsertOutcome::AlreadyRegistered
        );
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    /// Deterministic demonstration of the lost-update gap: two writers read
    /// the same (empty) snapshot, then both rewrite the file. The second
    /// rewrite wins and the first insert is gone.
    #[tokio::test]
    async fn interleaved_read_modify_write_loses_the_earlier_insert() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("emails.json"));

        let mut snapshot_a = store.read_all().await.unwrap();
        let mut snapshot_b = store.read_all().await.unwrap();

        snapshot_a.push(record("first@example.com"));
        store.write_all(&snapshot_a).await.unwrap();

        snapshot_b.push(record("second@example.com"));
        store.write_all(&snapshot_b).await.unwrap();

        let emails: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.email)
            .collect();
        assert_eq!(emails, vec!["second@example.com".to_string()]);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emails.json");
        std::fs::write(&path, b"not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.list_all().await.is_err());
    }
}

//! MongoDB lead store.
//!
//! A unique index on `email` turns the concurrent first-signup race into a
//! detectable duplicate-key write error, which maps to
//! `InsertOutcome::AlreadyRegistered` rather than a failure.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::error::AppError;
use crate::models::LeadRecord;
use crate::store::{InsertOutcome, LeadStore};

const LEADS_COLLECTION: &str = "leads";

/// MongoDB duplicate-key write error code.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<LeadRecord>,
}

impl MongoStore {
    /// Connect and ensure the unique email index exists.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Storage(format!("failed to connect to MongoDB: {}", e)))?;

        let collection = client.database(db_name).collection::<LeadRecord>(LEADS_COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection
            .create_index(index, None)
            .await
            .map_err(|e| AppError::Storage(format!("failed to create email index: {}", e)))?;

        tracing::info!(db = db_name, "Connected to MongoDB");

        Ok(Self { collection })
    }

    fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
        matches!(
            *err.kind,
            ErrorKind::Write(WriteFailure::WriteError(ref we)) if we.code == DUPLICATE_KEY
        )
    }
}

#[async_trait]
impl LeadStore for MongoStore {
    async fn find(&self, email: &str) -> Result<Option<LeadRecord>, AppError> {
        self.collection
            .find_one(doc! { "email": email }, None)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    async fn insert(&self, record: LeadRecord) -> Result<InsertOutcome, AppError> {
        match self.collection.insert_one(&record, None).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if Self::is_duplicate_key(&e) => Ok(InsertOutcome::AlreadyRegistered),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }

    async fn list_all(&self) -> Result<Vec<LeadRecord>, AppError> {
        let cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }
}

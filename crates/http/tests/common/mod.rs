//! Shared fixtures for HTTP tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]
#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Utc};
use insights_core::Insight;
use insights_http::{create_router, AppState};
use insights_service::InsightService;
use insights_storage::{InsightStore, Storage, StorageError};
use tempfile::TempDir;

pub fn router_for(store: Arc<dyn InsightStore>) -> Router {
    let service = Arc::new(InsightService::new(store));
    create_router(Arc::new(AppState::new(service)))
}

pub fn sqlite_router() -> (Router, Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("test.db")).unwrap();
    (router_for(Arc::new(storage.clone())), storage, temp_dir)
}

/// Store whose every call fails.
pub struct BrokenStore;

fn broken() -> StorageError {
    StorageError::DataCorruption {
        context: "simulated failure".to_owned(),
        source: Box::new(std::io::Error::other("secret internal detail")),
    }
}

#[async_trait]
impl InsightStore for BrokenStore {
    async fn insert(&self, _: i64, _: DateTime<Utc>, _: &str) -> Result<i64, StorageError> {
        Err(broken())
    }

    async fn get_by_id(&self, _: i64) -> Result<Option<Insight>, StorageError> {
        Err(broken())
    }

    async fn list_all(&self) -> Result<Vec<Insight>, StorageError> {
        Err(broken())
    }

    async fn delete_by_id(&self, _: i64) -> Result<usize, StorageError> {
        Err(broken())
    }
}

/// Store where every lookup finds a row but every delete removes nothing.
pub struct RacingStore;

#[async_trait]
impl InsightStore for RacingStore {
    async fn insert(&self, _: i64, _: DateTime<Utc>, _: &str) -> Result<i64, StorageError> {
        Err(broken())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Insight>, StorageError> {
        Ok(Some(Insight { id, brand: 0, created_at: Utc::now(), text: "here".to_owned() }))
    }

    async fn list_all(&self) -> Result<Vec<Insight>, StorageError> {
        Ok(Vec::new())
    }

    async fn delete_by_id(&self, _: i64) -> Result<usize, StorageError> {
        Ok(0)
    }
}

//! Storage backend trait abstraction
//!
//! The service layer depends on this trait rather than on `Storage`, so tests
//! can substitute stores that misbehave in controlled ways.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use insights_core::Insight;

use crate::error::StorageError;

/// Record store for insights.
#[async_trait]
pub trait InsightStore: Send + Sync {
    /// Append a row and return its store-assigned id.
    async fn insert(
        &self,
        brand: i64,
        created_at: DateTime<Utc>,
        text: &str,
    ) -> Result<i64, StorageError>;

    /// Point lookup. `None` is a normal outcome.
    async fn get_by_id(&self, id: i64) -> Result<Option<Insight>, StorageError>;

    /// All rows, ascending by id.
    async fn list_all(&self) -> Result<Vec<Insight>, StorageError>;

    /// Remove a row. Returns rows affected; 0 means nothing was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<usize, StorageError>;
}

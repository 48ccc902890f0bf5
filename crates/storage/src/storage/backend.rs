use async_trait::async_trait;
use chrono::{DateTime, Utc};
use insights_core::Insight;

use super::Storage;
use crate::error::StorageError;
use crate::traits::InsightStore;

#[async_trait]
impl InsightStore for Storage {
    async fn insert(
        &self,
        brand: i64,
        created_at: DateTime<Utc>,
        text: &str,
    ) -> Result<i64, StorageError> {
        let storage = self.clone();
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || storage.insert(brand, &created_at, &text)).await?
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Insight>, StorageError> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.get_by_id(id)).await?
    }

    async fn list_all(&self) -> Result<Vec<Insight>, StorageError> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.list_all()).await?
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, StorageError> {
        let storage = self.clone();
        tokio::task::spawn_blocking(move || storage.delete_by_id(id)).await?
    }
}

mod outcome;

use std::sync::Arc;

use chrono::{SubsecRound as _, Utc};
use insights_core::{validate_new_insight, Insight, FAILED_TO_CREATE_INSIGHT};
use insights_storage::InsightStore;
use serde_json::Value;

use crate::ServiceError;

pub use outcome::{CreateOutcome, DeleteOutcome};

pub struct InsightService {
    store: Arc<dyn InsightStore>,
}

impl InsightService {
    #[must_use]
    pub fn new(store: Arc<dyn InsightStore>) -> Self {
        Self { store }
    }

    /// Validate `payload`, persist it stamped with the current instant, and
    /// return the row as the store sees it.
    pub async fn create(&self, payload: &Value) -> Result<CreateOutcome, ServiceError> {
        tracing::debug!("Creating new insight");

        let new = match validate_new_insight(payload) {
            Ok(new) => new,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected insight payload");
                return Ok(CreateOutcome::Invalid(e));
            },
        };

        // Stored timestamps carry millisecond precision.
        let created_at = Utc::now().trunc_subsecs(3);
        let id = self.store.insert(new.brand(), created_at, new.text()).await?;

        // The returned row comes from the store, never from the payload.
        match self.store.get_by_id(id).await? {
            Some(insight) => {
                tracing::info!(id = insight.id, brand = insight.brand, "Insight created");
                Ok(CreateOutcome::Created(insight))
            },
            None => {
                tracing::error!(id, "Inserted insight could not be read back");
                Err(ServiceError::Inconsistent(FAILED_TO_CREATE_INSIGHT))
            },
        }
    }

    /// `None` means no insight has this id.
    pub async fn lookup(&self, id: i64) -> Result<Option<Insight>, ServiceError> {
        tracing::debug!(id, "Looking up insight");
        Ok(self.store.get_by_id(id).await?)
    }

    /// Every stored insight, ascending by id.
    pub async fn list(&self) -> Result<Vec<Insight>, ServiceError> {
        Ok(self.store.list_all().await?)
    }

    /// Verify-then-delete. The pair is not atomic; losing a race to another
    /// delete yields [`DeleteOutcome::RaceLost`], never a second success.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, ServiceError> {
        tracing::debug!(id, "Deleting insight");

        if self.store.get_by_id(id).await?.is_none() {
            tracing::debug!(id, "Insight not found for deletion");
            return Ok(DeleteOutcome::NotFound);
        }

        if self.store.delete_by_id(id).await? == 0 {
            tracing::warn!(id, "Insight vanished between lookup and delete");
            return Ok(DeleteOutcome::RaceLost);
        }

        tracing::info!(id, "Insight deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

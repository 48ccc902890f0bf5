//! Typed error enum for the service layer.
//!
//! Only infrastructure faults live here. Validation failures and missing
//! rows are ordinary outcomes and are returned as values.

use insights_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (pool, `SQLite`, undecodable row).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The store contradicted itself, e.g. a row it just inserted is missing.
    #[error("inconsistent store: {0}")]
    Inconsistent(&'static str),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Inconsistent(_) => false,
        }
    }
}

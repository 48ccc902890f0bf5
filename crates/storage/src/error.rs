//! Typed error enum for the storage layer.
//!
//! Lets callers tell pool exhaustion and `SQLite` failures apart from rows
//! that exist but cannot be decoded.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL / constraint / I/O failure reported by `SQLite`.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Row data could not be decoded into an `Insight`.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The blocking task running the statement panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl StorageError {
    /// Whether this error is likely transient (busy/locked database, pool timeout).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Pool(_) => true,
            Self::Database(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

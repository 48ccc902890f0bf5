//! Storage layer for insights
//!
//! `SQLite` behind an r2d2 connection pool. One table, parameter-bound
//! statements only.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
pub use traits::InsightStore;

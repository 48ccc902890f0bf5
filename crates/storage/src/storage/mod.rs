//! `SQLite` storage implementation.
//!
//! All methods are synchronous; the async `InsightStore` impl in `backend`
//! moves them onto the blocking pool.

mod backend;
mod insights;

use insights_core::{env_parse_with_default, DEFAULT_DB_POOL_SIZE};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Concurrency settings applied to every pooled connection
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("INSIGHTS_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (or create) the database at `db_path` and ensure the schema exists.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or the schema cannot be created.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            pool_size = pool_size,
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }

    /// Flush the WAL into the main database file and release this handle.
    ///
    /// Connections are closed once the last clone of the pool is dropped.
    ///
    /// # Errors
    /// Returns error if no connection is available or the checkpoint fails.
    pub fn close(self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))?;
        drop(conn);
        drop(self.pool);
        tracing::info!("Database connection closed");
        Ok(())
    }
}

//! Schema bootstrapping.
//!
//! The schema is created if absent and its version recorded in
//! `PRAGMA user_version`. Opening an existing database is a no-op.

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!(
        "Database schema version: {} (target: {})",
        current_version,
        SCHEMA_VERSION
    );

    if current_version < 1 {
        tracing::info!("Running migration v1: insights table");
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS insights (
                id INTEGER PRIMARY KEY ASC NOT NULL,
                brand INTEGER NOT NULL,
                createdAt TEXT NOT NULL,
                text TEXT NOT NULL
            );
            "#,
        )?;
    }

    if current_version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

use chrono::{DateTime, Utc};
use insights_core::{format_timestamp, parse_timestamp, Insight};
use rusqlite::{params, OptionalExtension as _};

use super::{get_conn, Storage};
use crate::error::StorageError;

const SELECT_COLUMNS: &str = "SELECT id, brand, createdAt, text FROM insights";

/// Row as read from `SQLite`, before the timestamp is decoded.
struct RawRow {
    id: i64,
    brand: i64,
    created_at: String,
    text: String,
}

impl RawRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self { id: row.get(0)?, brand: row.get(1)?, created_at: row.get(2)?, text: row.get(3)? })
    }

    fn into_insight(self) -> Result<Insight, StorageError> {
        let created_at =
            parse_timestamp(&self.created_at).map_err(|e| StorageError::DataCorruption {
                context: format!("insight {} has unparseable createdAt {:?}", self.id, self.created_at),
                source: Box::new(e),
            })?;
        Ok(Insight { id: self.id, brand: self.brand, created_at, text: self.text })
    }
}

impl Storage {
    /// Insert a new insight and return the id `SQLite` assigned to it.
    ///
    /// # Errors
    /// Returns error if the insert fails.
    pub fn insert(
        &self,
        brand: i64,
        created_at: &DateTime<Utc>,
        text: &str,
    ) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO insights (brand, createdAt, text) VALUES (?1, ?2, ?3)",
            params![brand, format_timestamp(created_at), text],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert a row with a caller-chosen id. Used to seed fixtures.
    ///
    /// # Errors
    /// Returns error if the insert fails, including on a duplicate id.
    pub fn insert_with_id(&self, insight: &Insight) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO insights (id, brand, createdAt, text) VALUES (?1, ?2, ?3, ?4)",
            params![
                insight.id,
                insight.brand,
                format_timestamp(&insight.created_at),
                insight.text
            ],
        )?;
        Ok(())
    }

    /// Get insight by ID.
    ///
    /// # Errors
    /// Returns error if the query fails or the row cannot be decoded.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Insight>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let raw = conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], RawRow::from_row)
            .optional()?;
        raw.map(RawRow::into_insight).transpose()
    }

    /// All insights in ascending id order.
    ///
    /// # Errors
    /// Returns error if the query fails or any row cannot be decoded.
    pub fn list_all(&self) -> Result<Vec<Insight>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
        let rows = stmt.query_map([], RawRow::from_row)?;
        rows.map(|row| row.map_err(StorageError::from).and_then(RawRow::into_insight)).collect()
    }

    /// Delete insight by ID and return the number of rows removed (0 or 1).
    ///
    /// # Errors
    /// Returns error if the delete fails.
    pub fn delete_by_id(&self, id: i64) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.execute("DELETE FROM insights WHERE id = ?1", params![id])?)
    }

    /// Number of stored insights.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn count(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM insights", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

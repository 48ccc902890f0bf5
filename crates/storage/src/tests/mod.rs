//! Test utilities and module declarations for storage tests.

use crate::Storage;
use chrono::{DateTime, TimeZone as _, Utc};
use insights_core::Insight;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

pub fn create_test_insight(id: i64, brand: i64, text: &str) -> Insight {
    Insight { id, brand, created_at: fixed_time(), text: text.to_owned() }
}

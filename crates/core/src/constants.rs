//! Shared constants for insights.
//!
//! Bounds and user-facing messages that more than one crate needs to agree on.

/// Minimum length of an insight's text, in characters.
pub const TEXT_MIN_CHARS: usize = 1;

/// Maximum length of an insight's text, in characters.
pub const TEXT_MAX_CHARS: usize = 1000;

/// `SQLite` connection pool size when `INSIGHTS_DB_POOL_SIZE` is unset.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Returned when a lookup or delete targets an id that does not exist.
pub const INSIGHT_NOT_FOUND: &str = "Insight not found";

/// Returned when a path id is not a base-10 integer.
pub const INVALID_ID_PARAMETER: &str = "Invalid ID parameter";

/// Returned when the request body is not parseable JSON.
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

pub const FAILED_TO_CREATE_INSIGHT: &str = "Failed to create insight";
pub const FAILED_TO_DELETE_INSIGHT: &str = "Failed to delete insight";
pub const FAILED_TO_LIST_INSIGHTS: &str = "Failed to list insights";
pub const FAILED_TO_LOOKUP_INSIGHT: &str = "Failed to lookup insight";

/// Body of a successful DELETE response.
pub const INSIGHT_DELETED: &str = "Insight deleted successfully";

//! The insight entity and its wire format.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A persisted insight row.
///
/// Serialized as `{"id", "brand", "createdAt", "text"}` with `createdAt` as an
/// ISO-8601 string carrying millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Store-assigned identifier, immutable once created.
    pub id: i64,
    /// Brand the insight is tagged with; always non-negative.
    pub brand: i64,
    /// Insertion instant.
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Free-form text, 1 to 1000 characters.
    pub text: String,
}

/// Format a timestamp the way insights are stored and serialized.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored or serialized timestamp.
///
/// # Errors
/// Returns error if `s` is not RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|d| d.with_timezone(&Utc))
}

mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(ts))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

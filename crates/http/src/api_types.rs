use serde::{Deserialize, Serialize};

/// Body of `POST /insights` as sent by [`crate::InsightsClient`].
///
/// The server itself accepts any JSON and validates it field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInsightRequest {
    pub brand: i64,
    pub text: String,
}

/// `{"message": ...}` body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"error": ...}` body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

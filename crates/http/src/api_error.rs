//! Typed API error for HTTP handlers.
//!
//! Converts operation outcomes and service errors into HTTP responses with a
//! `{"error": "message"}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use insights_service::ServiceError;

use crate::api_types::ErrorResponse;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns only the route's
/// generic message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid id, unparseable body, failed validation.
    BadRequest(String),
    /// 404 Not Found: no insight with the requested id.
    NotFound(String),
    /// 500: an operation reached a failure state that is not a fault, e.g.
    /// a delete that lost a race. Already logged by the service.
    Failed(&'static str),
    /// 500: storage or consistency fault. Details logged, not exposed.
    Internal(&'static str, anyhow::Error),
}

impl ApiError {
    /// Wrap a service error under the route's public failure message.
    pub fn internal(message: &'static str, err: ServiceError) -> Self {
        Self::Internal(message, err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_owned()),
            Self::Internal(msg, err) => {
                tracing::error!(error = ?err, "{msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.to_owned())
            },
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

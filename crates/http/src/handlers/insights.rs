use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use insights_core::{
    Insight, FAILED_TO_CREATE_INSIGHT, FAILED_TO_DELETE_INSIGHT, FAILED_TO_LIST_INSIGHTS,
    FAILED_TO_LOOKUP_INSIGHT, INSIGHT_DELETED, INSIGHT_NOT_FOUND, INVALID_ID_PARAMETER,
    INVALID_JSON_BODY,
};
use insights_service::{CreateOutcome, DeleteOutcome};

use crate::api_error::ApiError;
use crate::api_types::MessageResponse;
use crate::AppState;

/// Path ids must be a complete base-10 integer; `12abc` is rejected.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest(INVALID_ID_PARAMETER.to_owned()))
}

pub async fn list_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Insight>>, ApiError> {
    state
        .insight_service
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(FAILED_TO_LIST_INSIGHTS, e))
}

pub async fn get_insight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Insight>, ApiError> {
    let id = parse_id(&id)?;
    state
        .insight_service
        .lookup(id)
        .await
        .map_err(|e| ApiError::internal(FAILED_TO_LOOKUP_INSIGHT, e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(INSIGHT_NOT_FOUND.to_owned()))
}

/// The body is taken as raw bytes so that any JSON value, well-formed or
/// not for an insight, reaches validation.
pub async fn create_insight(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Insight>), ApiError> {
    let payload: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest(INVALID_JSON_BODY.to_owned()))?;

    match state
        .insight_service
        .create(&payload)
        .await
        .map_err(|e| ApiError::internal(FAILED_TO_CREATE_INSIGHT, e))?
    {
        CreateOutcome::Created(insight) => Ok((StatusCode::CREATED, Json(insight))),
        CreateOutcome::Invalid(e) => Err(ApiError::BadRequest(e.to_string())),
    }
}

pub async fn delete_insight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let outcome = state
        .insight_service
        .delete(id)
        .await
        .map_err(|e| ApiError::internal(FAILED_TO_DELETE_INSIGHT, e))?;

    match outcome {
        DeleteOutcome::Deleted => {
            Ok(Json(MessageResponse { message: INSIGHT_DELETED.to_owned() }))
        },
        DeleteOutcome::NotFound => Err(ApiError::NotFound(INSIGHT_NOT_FOUND.to_owned())),
        DeleteOutcome::RaceLost => Err(ApiError::Failed(FAILED_TO_DELETE_INSIGHT)),
    }
}

//! HTTP API server for insights, plus a typed client for the same surface.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod api_types;
mod client;
mod handlers;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use insights_service::InsightService;

pub use api_types::{CreateInsightRequest, ErrorResponse, MessageResponse};
pub use client::{ClientConfig, ClientError, InsightsClient};

/// Shared application state for all HTTP handlers.
///
/// Built once by the process entry point and handed to [`create_router`].
pub struct AppState {
    /// Create / lookup / list / delete operations
    pub insight_service: Arc<InsightService>,
}

impl AppState {
    #[must_use]
    pub fn new(insight_service: Arc<InsightService>) -> Self {
        Self { insight_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/_health", get(health))
        .route(
            "/insights",
            get(handlers::insights::list_insights).post(handlers::insights::create_insight),
        )
        .route(
            "/insights/{id}",
            get(handlers::insights::get_insight).delete(handlers::insights::delete_insight),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn health() -> &'static str {
    "OK"
}

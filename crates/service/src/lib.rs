//! Service layer for insights
//!
//! The four insight operations. Each validates its input, runs one store
//! statement (delete runs a lookup first) and returns a typed outcome.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod insight_service;

pub use error::ServiceError;
pub use insight_service::{CreateOutcome, DeleteOutcome, InsightService};

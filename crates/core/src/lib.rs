//! Core types for insights
//!
//! This crate contains the domain entity, its validation rules and the
//! constants shared by the storage, service and HTTP crates.

mod constants;
mod env_config;
mod insight;
mod validation;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use insight::*;
pub use validation::*;

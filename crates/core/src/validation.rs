//! Validation of untyped create requests.
//!
//! Every failing field is reported, not just the first one, so a client can
//! fix a request in a single round trip.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{TEXT_MAX_CHARS, TEXT_MIN_CHARS};

pub const BRAND_REQUIRED: &str = "Brand is required";
pub const BRAND_NOT_NON_NEGATIVE_INTEGER: &str = "Brand must be a non-negative integer";
pub const TEXT_REQUIRED: &str = "Text is required";
pub const TEXT_NOT_STRING: &str = "Text must be a string";
pub const TEXT_EMPTY: &str = "Text cannot be empty";
pub const TEXT_TOO_LONG: &str = "Text too long";
pub const BODY_NOT_OBJECT: &str = "Expected an object";

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field violations found in one create request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", join_field_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl ValidationError {
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether `field` is among the rejected fields.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// A create request that passed validation.
///
/// Only [`validate_new_insight`] constructs this, so holding one proves the
/// brand is non-negative and the text length is within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInsight {
    brand: i64,
    text: String,
}

impl NewInsight {
    #[must_use]
    pub fn brand(&self) -> i64 {
        self.brand
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Validate a raw create payload.
///
/// Expects an object with an integer `brand >= 0` and a string `text` of
/// 1 to 1000 characters. Unknown fields are ignored. Numbers with a zero
/// fractional part (`3.0`) count as integers.
///
/// # Errors
/// Returns [`ValidationError`] listing every field that failed.
pub fn validate_new_insight(input: &Value) -> Result<NewInsight, ValidationError> {
    let Some(obj) = input.as_object() else {
        return Err(ValidationError {
            errors: vec![FieldError { field: "body", message: BODY_NOT_OBJECT }],
        });
    };

    let mut errors = Vec::new();
    let brand = check_brand(obj).map_err(|e| errors.push(e)).ok();
    let text = check_text(obj).map_err(|e| errors.push(e)).ok();

    match (brand, text) {
        (Some(brand), Some(text)) => Ok(NewInsight { brand, text }),
        _ => Err(ValidationError { errors }),
    }
}

fn check_brand(obj: &Map<String, Value>) -> Result<i64, FieldError> {
    let reject = |message| FieldError { field: "brand", message };
    match obj.get("brand") {
        None | Some(Value::Null) => Err(reject(BRAND_REQUIRED)),
        Some(Value::Number(n)) => {
            let as_int = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            });
            as_int.filter(|b| *b >= 0).ok_or_else(|| reject(BRAND_NOT_NON_NEGATIVE_INTEGER))
        },
        Some(_) => Err(reject(BRAND_NOT_NON_NEGATIVE_INTEGER)),
    }
}

fn check_text(obj: &Map<String, Value>) -> Result<String, FieldError> {
    let reject = |message| FieldError { field: "text", message };
    match obj.get("text") {
        None | Some(Value::Null) => Err(reject(TEXT_REQUIRED)),
        Some(Value::String(s)) => {
            let len = s.chars().count();
            if len < TEXT_MIN_CHARS {
                Err(reject(TEXT_EMPTY))
            } else if len > TEXT_MAX_CHARS {
                Err(reject(TEXT_TOO_LONG))
            } else {
                Ok(s.clone())
            }
        },
        Some(_) => Err(reject(TEXT_NOT_STRING)),
    }
}

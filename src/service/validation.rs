//! Request validation for student bodies.
//!
//! Rule failures carry the field-specific detail; the HTTP layer logs it
//! and answers with the generic message only.

use crate::error::AppError;
use crate::model::coerce_phone;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
}

pub enum FieldKind {
    Text { max_length: usize },
    Email { max_length: usize },
    Numeric,
}

/// Per-column constraints: name and language at most 50 characters,
/// email a valid address at most 255, phone numeric.
const STUDENT_RULES: [(&str, FieldRule); 4] = [
    (
        "name",
        FieldRule {
            required: true,
            kind: FieldKind::Text { max_length: 50 },
        },
    ),
    (
        "email",
        FieldRule {
            required: true,
            kind: FieldKind::Email { max_length: 255 },
        },
    ),
    (
        "phone",
        FieldRule {
            required: true,
            kind: FieldKind::Numeric,
        },
    ),
    (
        "language",
        FieldRule {
            required: true,
            kind: FieldKind::Text { max_length: 50 },
        },
    ),
];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full body (create, full update). All required fields
    /// must be present and non-null.
    pub fn validate(body: &Map<String, Value>) -> Result<(), AppError> {
        for (column, rule) in &STUDENT_RULES {
            let val = body.get(*column);
            if rule.required && (val.is_none() || val == Some(&Value::Null)) {
                return Err(AppError::Validation(format!("{} is required", column)));
            }
            if let Some(v) = val {
                validate_field(column, v, rule)?;
            }
        }
        Ok(())
    }

    /// Validate only the fields present in the body (partial update).
    /// Required is not enforced for missing fields.
    pub fn validate_partial(body: &Map<String, Value>) -> Result<(), AppError> {
        for (column, rule) in &STUDENT_RULES {
            if let Some(v) = body.get(*column) {
                validate_field(column, v, rule)?;
            }
        }
        Ok(())
    }
}

fn validate_field(column: &str, v: &Value, rule: &FieldRule) -> Result<(), AppError> {
    if v.is_null() {
        return Err(AppError::Validation(format!("{} must not be null", column)));
    }
    match rule.kind {
        FieldKind::Text { max_length } => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", column)))?;
            check_length(column, s, max_length)
        }
        FieldKind::Email { max_length } => {
            let s = v
                .as_str()
                .ok_or_else(|| AppError::Validation(format!("{} must be a string", column)))?;
            check_length(column, s, max_length)?;
            if !email_regex().is_match(s) {
                return Err(AppError::Validation(format!(
                    "{} must be a valid email",
                    column
                )));
            }
            Ok(())
        }
        FieldKind::Numeric => {
            if coerce_phone(v).is_none() {
                return Err(AppError::Validation(format!("{} must be numeric", column)));
            }
            Ok(())
        }
    }
}

fn check_length(column: &str, s: &str, max_length: usize) -> Result<(), AppError> {
    if s.chars().count() > max_length {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            column, max_length
        )));
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"))
}

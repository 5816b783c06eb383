//! Row and request payload types for the student table.

use crate::error::AppError;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// One persisted row.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub language: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full request body: create and full update. All fields present.
#[derive(Clone, Debug)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub language: String,
}

/// Subset request body: partial update. Absent fields stay untouched.
#[derive(Clone, Debug, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<i64>,
    pub language: Option<String>,
}

impl StudentDraft {
    /// Build from a body that already passed full validation.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(StudentDraft {
            name: text_field(body, "name")?,
            email: text_field(body, "email")?,
            phone: phone_field(body)?,
            language: text_field(body, "language")?,
        })
    }
}

impl StudentPatch {
    /// Build from a body that already passed partial validation. Unknown
    /// keys are ignored.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        let mut patch = StudentPatch::default();
        if body.contains_key("name") {
            patch.name = Some(text_field(body, "name")?);
        }
        if body.contains_key("email") {
            patch.email = Some(text_field(body, "email")?);
        }
        if body.contains_key("phone") {
            patch.phone = Some(phone_field(body)?);
        }
        if body.contains_key("language") {
            patch.language = Some(text_field(body, "language")?);
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.language.is_none()
    }
}

fn text_field(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", field)))
}

fn phone_field(body: &Map<String, Value>) -> Result<i64, AppError> {
    body.get("phone")
        .and_then(coerce_phone)
        .ok_or_else(|| AppError::Validation("phone must be numeric".into()))
}

/// Phone arrives as a JSON number or a numeric string; both are stored
/// as an integer.
pub(crate) fn coerce_phone(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn draft_accepts_numeric_string_phone() {
        let b = body(json!({"name": "Ana", "email": "ana@x.com", "phone": "123", "language": "ES"}));
        let draft = StudentDraft::from_body(&b).unwrap();
        assert_eq!(draft.phone, 123);
    }

    #[test]
    fn patch_keeps_absent_fields_unset() {
        let b = body(json!({"language": "EN"}));
        let patch = StudentPatch::from_body(&b).unwrap();
        assert_eq!(patch.language.as_deref(), Some("EN"));
        assert!(patch.name.is_none());
        assert!(patch.phone.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn coerce_phone_rejects_non_numeric_text() {
        assert_eq!(coerce_phone(&json!("12a3")), None);
        assert_eq!(coerce_phone(&json!(12.5)), None);
        assert_eq!(coerce_phone(&json!(5550000)), Some(5550000));
    }
}

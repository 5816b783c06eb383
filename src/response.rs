//! Standard response envelope helpers.
//!
//! Every outcome, success or error, is rendered as
//! `{"message": ..., "status": ..., "data"?: ...}` with the status field
//! mirroring the HTTP status code.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn with_data<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: T,
) -> (StatusCode, Json<Envelope<T>>) {
    (
        status,
        Json(Envelope {
            message: message.into(),
            status: status.as_u16(),
            data: Some(data),
        }),
    )
}

pub fn message_only(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<Envelope<()>>) {
    (
        status,
        Json(Envelope {
            message: message.into(),
            status: status.as_u16(),
            data: None,
        }),
    )
}

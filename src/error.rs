//! Typed errors and HTTP mapping.
//!
//! Every failure is converted to the response envelope here; callers only
//! ever see the generic message, the specific detail goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(detail) => {
                tracing::warn!(%detail, "request validation failed");
                (StatusCode::BAD_REQUEST, "invalid request".to_string())
            }
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        crate::response::message_only(status, message).into_response()
    }
}

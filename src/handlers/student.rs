//! Student CRUD handlers: list, read, create, update, patch, delete.
//!
//! The id arrives as a path string and is validated here rather than by
//! the extractor, so a non-numeric id is a 400 envelope, not a framework
//! rejection. Bodies are taken as `Result<Json, JsonRejection>` for the
//! same reason.

use crate::error::AppError;
use crate::model::{StudentDraft, StudentPatch};
use crate::response;
use crate::service::{CrudService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::Validation(format!("id must be numeric, got '{}'", id_str)))
}

fn body_to_map(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    let Json(value) = body.map_err(|e| AppError::Validation(format!("invalid json body: {}", e)))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Validation("body must be a JSON object".into())),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let students = CrudService::list(&state.pool).await?;
    let message = if students.is_empty() {
        "no students registered"
    } else {
        "ok"
    };
    Ok(response::with_data(StatusCode::OK, message, students))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let student = CrudService::read(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("student"))?;
    Ok(response::with_data(StatusCode::OK, "ok", student))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    RequestValidator::validate(&body)?;
    let draft = StudentDraft::from_body(&body)?;
    let student = CrudService::create(&state.pool, &draft).await?;
    Ok(response::with_data(
        StatusCode::CREATED,
        "student created",
        student,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    RequestValidator::validate(&body)?;
    let draft = StudentDraft::from_body(&body)?;
    let student = CrudService::update(&state.pool, id, &draft)
        .await?
        .ok_or(AppError::NotFound("student"))?;
    Ok(response::with_data(
        StatusCode::OK,
        "student updated",
        student,
    ))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    RequestValidator::validate_partial(&body)?;
    let patch = StudentPatch::from_body(&body)?;
    let student = CrudService::patch(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::NotFound("student"))?;
    Ok(response::with_data(
        StatusCode::OK,
        "student updated",
        student,
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !CrudService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("student"));
    }
    Ok(response::message_only(
        StatusCode::NON_AUTHORITATIVE_INFORMATION,
        "student deleted",
    ))
}

//! CRUD execution against SQLite.
//!
//! Writes use RETURNING so a zero-row update surfaces as `None` from the
//! same statement that performed it.

use crate::error::AppError;
use crate::model::{Student, StudentDraft, StudentPatch};
use crate::sql::{self, Arg};
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// All rows, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = sql::SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Student>(sql::SELECT_ALL)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One row by primary key, or None.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Student>, AppError> {
        tracing::debug!(sql = sql::SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Student>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one row; id and timestamps come from the database.
    pub async fn create(pool: &SqlitePool, draft: &StudentDraft) -> Result<Student, AppError> {
        tracing::debug!(sql = sql::INSERT, "query");
        let row = sqlx::query_as::<_, Student>(sql::INSERT)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(draft.phone)
            .bind(&draft.language)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(row)
    }

    /// Overwrite all four fields and refresh updated_at. None when the id
    /// matched no row.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        draft: &StudentDraft,
    ) -> Result<Option<Student>, AppError> {
        tracing::debug!(sql = sql::UPDATE_ALL, id, "query");
        let row = sqlx::query_as::<_, Student>(sql::UPDATE_ALL)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(draft.phone)
            .bind(&draft.language)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Write only the supplied fields; updated_at refreshes only if at
    /// least one field was supplied. None when the id matched no row.
    pub async fn patch(
        pool: &SqlitePool,
        id: i64,
        patch: &StudentPatch,
    ) -> Result<Option<Student>, AppError> {
        let q = sql::patch_update(id, patch);
        tracing::debug!(sql = %q.sql, id, "query");
        let mut query = sqlx::query_as::<_, Student>(&q.sql);
        for param in &q.params {
            query = match param {
                Arg::Int(n) => query.bind(*n),
                Arg::Text(s) => query.bind(s.clone()),
            };
        }
        let row = query.fetch_optional(pool).await?;
        Ok(row)
    }

    /// Delete by id. True when a row was removed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = sql::DELETE_BY_ID, id, "query");
        let result = sqlx::query(sql::DELETE_BY_ID).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

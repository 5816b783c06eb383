//! Schema setup: DDL for the student table, applied at startup.

use crate::error::AppError;
use sqlx::SqlitePool;

/// AUTOINCREMENT keeps deleted ids from being reused. Timestamp defaults
/// use strftime with %f so updated_at moves at millisecond granularity.
const CREATE_STUDENT_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS student (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  email TEXT NOT NULL,
  phone INTEGER NOT NULL,
  language TEXT NOT NULL,
  created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
  updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)";

/// Create the student table if it does not exist. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_STUDENT_TABLE).execute(pool).await?;
    Ok(())
}

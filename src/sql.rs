//! Parameterized statements for the student table: values as parameters,
//! identifiers fixed at compile time.

use crate::model::StudentPatch;

pub const COLUMNS: &str = "id, name, email, phone, language, created_at, updated_at";

/// updated_at refresh expression, millisecond precision, UTC.
const TOUCH_UPDATED_AT: &str = "updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')";

pub const SELECT_ALL: &str =
    "SELECT id, name, email, phone, language, created_at, updated_at FROM student ORDER BY id";

pub const SELECT_BY_ID: &str =
    "SELECT id, name, email, phone, language, created_at, updated_at FROM student WHERE id = ?1";

/// created_at/updated_at fall to their DDL defaults; RETURNING hands the
/// generated id and timestamps back in the same statement.
pub const INSERT: &str = "INSERT INTO student (name, email, phone, language) \
     VALUES (?1, ?2, ?3, ?4) \
     RETURNING id, name, email, phone, language, created_at, updated_at";

pub const UPDATE_ALL: &str = "UPDATE student \
     SET name = ?1, email = ?2, phone = ?3, language = ?4, \
         updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now') \
     WHERE id = ?5 \
     RETURNING id, name, email, phone, language, created_at, updated_at";

pub const DELETE_BY_ID: &str = "DELETE FROM student WHERE id = ?1";

/// A built statement plus its bind values, in placeholder order.
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Arg>,
}

/// Bind value for the student columns: only integers and text occur.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Int(i64),
    Text(String),
}

/// UPDATE by id with a SET list covering only the supplied fields, plus
/// the updated_at refresh. An empty patch degrades to a SELECT of the
/// matched row so the caller still learns whether the id exists, and no
/// write (and no updated_at refresh) happens.
pub fn patch_update(id: i64, patch: &StudentPatch) -> QueryBuf {
    let mut params: Vec<Arg> = Vec::new();
    let mut sets: Vec<String> = Vec::new();
    if let Some(ref name) = patch.name {
        params.push(Arg::Text(name.clone()));
        sets.push(format!("name = ?{}", params.len()));
    }
    if let Some(ref email) = patch.email {
        params.push(Arg::Text(email.clone()));
        sets.push(format!("email = ?{}", params.len()));
    }
    if let Some(phone) = patch.phone {
        params.push(Arg::Int(phone));
        sets.push(format!("phone = ?{}", params.len()));
    }
    if let Some(ref language) = patch.language {
        params.push(Arg::Text(language.clone()));
        sets.push(format!("language = ?{}", params.len()));
    }

    if sets.is_empty() {
        params.push(Arg::Int(id));
        return QueryBuf {
            sql: format!("SELECT {} FROM student WHERE id = ?1", COLUMNS),
            params,
        };
    }

    sets.push(TOUCH_UPDATED_AT.to_string());
    params.push(Arg::Int(id));
    QueryBuf {
        sql: format!(
            "UPDATE student SET {} WHERE id = ?{} RETURNING {}",
            sets.join(", "),
            params.len(),
            COLUMNS
        ),
        params,
    }
}

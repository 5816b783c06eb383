//! Student registry: REST CRUD service for the student table, backed by SQLite.

pub mod config;
pub mod error;
pub mod migration;
pub mod model;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::Settings;
pub use error::AppError;
pub use migration::apply_migrations;
pub use model::{Student, StudentDraft, StudentPatch};
pub use state::AppState;
pub use store::connect;
pub use routes::{app, common_routes, student_routes};
pub use service::{CrudService, RequestValidator};

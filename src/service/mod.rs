//! CrudService: statement execution. RequestValidator: body checks.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;

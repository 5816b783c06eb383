//! HTTP handlers, one per student operation.

pub mod student;

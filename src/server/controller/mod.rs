//! HTTP request handlers.
//!
//! Controllers validate access via `AuthGuard`, convert DTOs to parameter
//! models, call the matching service and convert the result back to a DTO.
//! Every handler carries a `#[utoipa::path]` annotation feeding the OpenAPI
//! document served at `/docs`.

pub mod announcement;
pub mod auth;
pub mod class;
pub mod gallery;
pub mod grade;
pub mod major;
pub mod news;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod subject;
pub mod teacher;

/// Default page size for paginated listings.
pub(crate) fn default_entries() -> u64 {
    10
}

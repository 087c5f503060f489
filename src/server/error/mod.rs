//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping (401/403), while
/// generic variants map to standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique-constraint violations are surfaced as 400 Bad Request with a
    /// "<field> is already in use" message; everything else results in
    /// 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<InternalError> for AppError {
    fn from(err: InternalError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Extracts the offending column from a unique-constraint violation, if any.
///
/// SQLite reports `UNIQUE constraint failed: <table>.<column>`; Postgres
/// reports `duplicate key value violates unique_constraint "<index>"` where
/// the index name ends with the column. Returns the bare column name so the
/// client message reads "<column> is already in use".
fn duplicate_key_field(err: &sea_orm::DbErr) -> Option<String> {
    let message = err.to_string();

    if let Some(rest) = message.split("UNIQUE constraint failed: ").nth(1) {
        let qualified = rest.split(&[',', ' '][..]).next()?;
        return Some(qualified.rsplit('.').next()?.to_string());
    }

    if message.contains("duplicate key value violates unique constraint") {
        let index = message.split('"').nth(1)?;
        // Index names follow idx-<table>-<column> / <table>_<column>_key conventions.
        let column = index
            .trim_end_matches("_key")
            .rsplit(&['-', '_'][..])
            .next()?;
        return Some(column.to_string());
    }

    None
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and duplicate-key database errors
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => {
                if let Some(field) = duplicate_key_field(&err) {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorDto {
                            error: format!("{} is already in use", field),
                        }),
                    )
                        .into_response();
                }
                InternalServerError(err).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod test {
    use super::duplicate_key_field;
    use sea_orm::DbErr;

    #[test]
    fn extracts_column_from_sqlite_unique_violation() {
        let err = DbErr::Custom(
            "Execution Error: error returned from database: \
             UNIQUE constraint failed: majors.code"
                .to_string(),
        );

        assert_eq!(duplicate_key_field(&err), Some("code".to_string()));
    }

    #[test]
    fn extracts_column_from_postgres_unique_violation() {
        let err = DbErr::Custom(
            "error returned from database: duplicate key value violates \
             unique constraint \"idx-majors-code\""
                .to_string(),
        );

        assert_eq!(duplicate_key_field(&err), Some("code".to_string()));
    }

    #[test]
    fn ignores_unrelated_database_errors() {
        let err = DbErr::Custom("connection reset by peer".to_string());

        assert_eq!(duplicate_key_field(&err), None);
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was sent on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed signature verification or has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// The token is valid but its role claim does not grant access.
    ///
    /// Results in a 403 Forbidden response. The offending role is kept for
    /// server-side logging only.
    #[error("Role '{0}' does not grant access to this route")]
    AccessDenied(String),

    /// Login attempt with an unknown username or wrong password.
    ///
    /// Results in a 401 Unauthorized response with a message that does not
    /// reveal which of the two was wrong.
    #[error("Invalid username or password")]
    BadCredentials,
}

/// Maps authentication errors to HTTP responses.
///
/// Missing and invalid tokens are both 401 so a caller cannot distinguish a
/// bad signature from an expired one. Role failures are 403. Client-facing
/// messages stay generic; the detailed variant is logged where it occurred.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid or expired token".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
            Self::BadCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

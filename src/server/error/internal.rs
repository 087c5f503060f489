use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Bcrypt failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Failed to hash password: {0}")]
    HashPassword(#[source] bcrypt::BcryptError),

    /// Signing an auth token failed.
    ///
    /// Should not happen with a well-formed HS256 key; results in a 500
    /// Internal Server Error with a generic message returned to the client.
    #[error("Failed to sign auth token: {0}")]
    SignToken(#[source] jsonwebtoken::errors::Error),
}

//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool and `JwtKeys` wraps
//! reference-counted key material.

use sea_orm::DatabaseConnection;

use crate::server::middleware::auth::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 keys used to sign and verify bearer tokens.
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }
}

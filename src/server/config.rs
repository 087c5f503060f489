use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub http_addr: String,

    /// Exact origin allowed by CORS; a permissive layer is used when unset.
    pub cors_origin: Option<String>,

    /// Credentials for the bootstrap admin account created on first start.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            http_addr: std::env::var("HTTP_ADDR").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
            admin_username: std::env::var("ADMIN_USERNAME").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{Claims, JwtKeys, Role},
};

mod require;

const TEST_SECRET: &str = "middleware-test-secret";

fn keys() -> JwtKeys {
    JwtKeys::new(TEST_SECRET)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

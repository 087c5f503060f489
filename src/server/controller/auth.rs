use axum::{
    extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, UserDto},
    },
    server::{error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Issues a bearer token carrying the account's role claim. The token is
/// valid for 24 hours; there is no refresh flow.
///
/// # Returns
/// - `200 OK` - Token and account details
/// - `401 Unauthorized` - Unknown username, wrong password or inactive account
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (token, user) = service.login(&payload.username, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the authenticated caller's account.
///
/// # Access Control
/// - Any valid token
///
/// # Returns
/// - `200 OK` - Account details
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let service = AuthService::new(&state.db, &state.jwt);

    let user = service.me(claims.sub).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

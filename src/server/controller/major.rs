use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        major::{CreateMajorDto, MajorDto, PaginatedMajorsDto, UpdateMajorDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::major::{CreateMajorParams, UpdateMajorParams},
        service::major::MajorService,
        state::AppState,
    },
};

/// Tag for grouping major endpoints in OpenAPI documentation
pub static MAJOR_TAG: &str = "major";

#[derive(Deserialize)]
pub struct ListMajorsParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// Admin-only; includes majors that have been deactivated.
    #[serde(default)]
    pub include_inactive: bool,
}

/// Create a new academic major.
///
/// # Access Control
/// - `Admin` - Only admins can create majors
///
/// # Returns
/// - `201 Created` - Successfully created major
/// - `400 Bad Request` - Invalid major data or duplicate code
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/majors",
    tag = MAJOR_TAG,
    request_body = CreateMajorDto,
    responses(
        (status = 201, description = "Successfully created major", body = MajorDto),
        (status = 400, description = "Invalid major data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_major(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMajorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = MajorService::new(&state.db);

    let params = CreateMajorParams::from_dto(payload)?;

    let major = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(major.into_dto())))
}

/// Get paginated majors.
///
/// Public listing for the academic-programs page. Only active majors are
/// returned unless an admin sets `include_inactive`.
///
/// # Returns
/// - `200 OK` - Paginated list of majors
/// - `401/403` - `include_inactive` requested without an admin token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/majors",
    tag = MAJOR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated majors (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved majors", body = PaginatedMajorsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_majors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListMajorsParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.include_inactive {
        let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;
    }

    let service = MajorService::new(&state.db);

    let majors = service
        .get_paginated(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(majors.into_dto())))
}

/// Get a specific major by ID.
///
/// # Returns
/// - `200 OK` - Major details
/// - `404 Not Found` - No major with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/majors/{id}",
    tag = MAJOR_TAG,
    params(
        ("id" = i32, Path, description = "Major ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved major", body = MajorDto),
        (status = 404, description = "Major not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_major_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MajorService::new(&state.db);

    let major = service.get_by_id(id).await?;

    match major {
        Some(major) => Ok((StatusCode::OK, Json(major.into_dto()))),
        None => Err(AppError::NotFound("Major not found".to_string())),
    }
}

/// Update a major.
///
/// # Access Control
/// - `Admin` - Only admins can update majors
///
/// # Returns
/// - `200 OK` - Successfully updated major
/// - `400 Bad Request` - Invalid major data or duplicate code
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `404 Not Found` - No major with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/majors/{id}",
    tag = MAJOR_TAG,
    params(
        ("id" = i32, Path, description = "Major ID")
    ),
    request_body = UpdateMajorDto,
    responses(
        (status = 200, description = "Successfully updated major", body = MajorDto),
        (status = 400, description = "Invalid major data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Major not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_major(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMajorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = MajorService::new(&state.db);

    let params = UpdateMajorParams::from_dto(id, payload)?;

    let major = service.update(params).await?;

    match major {
        Some(major) => Ok((StatusCode::OK, Json(major.into_dto()))),
        None => Err(AppError::NotFound("Major not found".to_string())),
    }
}

/// Delete a major.
///
/// The delete is rejected while students, subjects or classes still
/// reference the major; the dependent count is included in the error.
///
/// # Access Control
/// - `Admin` - Only admins can delete majors
///
/// # Returns
/// - `204 No Content` - Successfully deleted major
/// - `400 Bad Request` - Dependent records still reference this major
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `404 Not Found` - No major with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/majors/{id}",
    tag = MAJOR_TAG,
    params(
        ("id" = i32, Path, description = "Major ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted major"),
        (status = 400, description = "Dependent records exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Major not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_major(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = MajorService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Major not found".to_string()))
    }
}

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
        class::{ClassDto, CreateClassDto, PaginatedClassesDto, UpdateClassDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::class::{CreateClassParams, UpdateClassParams},
        service::class::ClassService,
        state::AppState,
    },
};

/// Tag for grouping class endpoints in OpenAPI documentation
pub static CLASS_TAG: &str = "class";

#[derive(Deserialize)]
pub struct ListClassesParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub major_id: Option<i32>,
    #[serde(default)]
    pub grade_level: Option<i32>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Create a new class.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/classes",
    tag = CLASS_TAG,
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Successfully created class", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = ClassService::new(&state.db);

    let params = CreateClassParams::from_dto(payload)?;

    let class = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(class.into_dto())))
}

/// Get paginated classes with optional major and grade filters.
///
/// # Access Control
/// - Any valid token; `include_inactive` additionally requires `Admin`
#[utoipa::path(
    get,
    path = "/api/classes",
    tag = CLASS_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("major_id" = Option<i32>, Query, description = "Filter by major"),
        ("grade_level" = Option<i32>, Query, description = "Filter by grade level"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated classes (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved classes", body = PaginatedClassesDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListClassesParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.jwt, &headers);
    if params.include_inactive {
        let _ = guard.require(&[Role::Admin])?;
    } else {
        let _ = guard.require(&[])?;
    }

    let service = ClassService::new(&state.db);

    let classes = service
        .get_paginated(
            params.page,
            params.entries,
            params.major_id,
            params.grade_level,
            params.include_inactive,
        )
        .await?;

    Ok((StatusCode::OK, Json(classes.into_dto())))
}

/// Get a specific class by ID.
///
/// # Access Control
/// - Any valid token
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved class", body = ClassDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_class_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let service = ClassService::new(&state.db);

    let class = service.get_by_id(id).await?;

    match class {
        Some(class) => Ok((StatusCode::OK, Json(class.into_dto()))),
        None => Err(AppError::NotFound("Class not found".to_string())),
    }
}

/// Update a class.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Successfully updated class", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = ClassService::new(&state.db);

    let params = UpdateClassParams::from_dto(id, payload)?;

    let class = service.update(params).await?;

    match class {
        Some(class) => Ok((StatusCode::OK, Json(class.into_dto()))),
        None => Err(AppError::NotFound("Class not found".to_string())),
    }
}

/// Soft-delete a class.
///
/// Rejected while students or schedules still reference the class.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    tag = CLASS_TAG,
    params(
        ("id" = i32, Path, description = "Class ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated class"),
        (status = 400, description = "Dependent records exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = ClassService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Class not found".to_string()))
    }
}

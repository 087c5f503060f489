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
        teacher::{CreateTeacherDto, PaginatedTeachersDto, TeacherDto, UpdateTeacherDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::teacher::{CreateTeacherParams, UpdateTeacherParams},
        service::teacher::TeacherService,
        state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

#[derive(Deserialize)]
pub struct ListTeachersParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Register a new teacher.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Successfully registered teacher", body = TeacherDto),
        (status = 400, description = "Invalid teacher data or duplicate NIP", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = TeacherService::new(&state.db);

    let params = CreateTeacherParams::from_dto(payload)?;

    let teacher = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// Get paginated teachers.
///
/// # Access Control
/// - Any valid token; `include_inactive` additionally requires `Admin`
#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated teachers (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = PaginatedTeachersDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListTeachersParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.jwt, &headers);
    if params.include_inactive {
        let _ = guard.require(&[Role::Admin])?;
    } else {
        let _ = guard.require(&[])?;
    }

    let service = TeacherService::new(&state.db);

    let teachers = service
        .get_paginated(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(teachers.into_dto())))
}

/// Get a specific teacher by ID.
///
/// # Access Control
/// - Any valid token
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let service = TeacherService::new(&state.db);

    let teacher = service.get_by_id(id).await?;

    match teacher {
        Some(teacher) => Ok((StatusCode::OK, Json(teacher.into_dto()))),
        None => Err(AppError::NotFound("Teacher not found".to_string())),
    }
}

/// Update a teacher.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Successfully updated teacher", body = TeacherDto),
        (status = 400, description = "Invalid teacher data or duplicate NIP", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = TeacherService::new(&state.db);

    let params = UpdateTeacherParams::from_dto(id, payload)?;

    let teacher = service.update(params).await?;

    match teacher {
        Some(teacher) => Ok((StatusCode::OK, Json(teacher.into_dto()))),
        None => Err(AppError::NotFound("Teacher not found".to_string())),
    }
}

/// Soft-delete a teacher.
///
/// Rejected while subjects, homeroom classes or schedules still reference
/// the teacher.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated teacher"),
        (status = 400, description = "Dependent records exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = TeacherService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Teacher not found".to_string()))
    }
}

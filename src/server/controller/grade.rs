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
        grade::{CreateGradeDto, GradeDto, PaginatedGradesDto, UpdateGradeDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::grade::{CreateGradeParams, UpdateGradeParams},
        service::grade::GradeService,
        state::AppState,
    },
};

/// Tag for grouping grade endpoints in OpenAPI documentation
pub static GRADE_TAG: &str = "grade";

#[derive(Deserialize)]
pub struct ListGradesParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub student_id: Option<i32>,
    #[serde(default)]
    pub subject_id: Option<i32>,
    #[serde(default)]
    pub semester: Option<i32>,
}

/// Record a grade.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/grades",
    tag = GRADE_TAG,
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Successfully recorded grade", body = GradeDto),
        (status = 400, description = "Invalid grade data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_grade(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = GradeService::new(&state.db);

    let params = CreateGradeParams::from_dto(payload)?;

    let grade = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(grade.into_dto())))
}

/// Get paginated grades with optional student, subject and semester filters.
///
/// # Access Control
/// - `Admin` or `Teacher`
#[utoipa::path(
    get,
    path = "/api/grades",
    tag = GRADE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("student_id" = Option<i32>, Query, description = "Filter by student"),
        ("subject_id" = Option<i32>, Query, description = "Filter by subject"),
        ("semester" = Option<i32>, Query, description = "Filter by semester")
    ),
    responses(
        (status = 200, description = "Successfully retrieved grades", body = PaginatedGradesDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_grades(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListGradesParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin, Role::Teacher])?;

    let service = GradeService::new(&state.db);

    let grades = service
        .get_paginated(
            params.page,
            params.entries,
            params.student_id,
            params.subject_id,
            params.semester,
        )
        .await?;

    Ok((StatusCode::OK, Json(grades.into_dto())))
}

/// Get a specific grade by ID.
///
/// # Access Control
/// - `Admin` or `Teacher`
#[utoipa::path(
    get,
    path = "/api/grades/{id}",
    tag = GRADE_TAG,
    params(
        ("id" = i32, Path, description = "Grade ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved grade", body = GradeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_grade_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin, Role::Teacher])?;

    let service = GradeService::new(&state.db);

    let grade = service.get_by_id(id).await?;

    match grade {
        Some(grade) => Ok((StatusCode::OK, Json(grade.into_dto()))),
        None => Err(AppError::NotFound("Grade not found".to_string())),
    }
}

/// Update a grade.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/grades/{id}",
    tag = GRADE_TAG,
    params(
        ("id" = i32, Path, description = "Grade ID")
    ),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Successfully updated grade", body = GradeDto),
        (status = 400, description = "Invalid grade data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_grade(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = GradeService::new(&state.db);

    let params = UpdateGradeParams::from_dto(id, payload)?;

    let grade = service.update(params).await?;

    match grade {
        Some(grade) => Ok((StatusCode::OK, Json(grade.into_dto()))),
        None => Err(AppError::NotFound("Grade not found".to_string())),
    }
}

/// Delete a grade.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/grades/{id}",
    tag = GRADE_TAG,
    params(
        ("id" = i32, Path, description = "Grade ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted grade"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Grade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_grade(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = GradeService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Grade not found".to_string()))
    }
}

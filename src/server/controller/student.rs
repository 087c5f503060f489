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
        student::{
            BulkStudentActionDto, BulkStudentResultDto, CreateStudentDto, PaginatedStudentsDto,
            StudentDto, UpdateStudentDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::student::{BulkStudentParams, CreateStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize)]
pub struct ListStudentsParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub class_id: Option<i32>,
    #[serde(default)]
    pub major_id: Option<i32>,
    #[serde(default)]
    pub grade_level: Option<i32>,
    /// Matches a substring of the name or the exact NISN.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Register a new student.
///
/// # Access Control
/// - `Admin` - Only admins can register students
///
/// # Returns
/// - `201 Created` - Successfully registered student
/// - `400 Bad Request` - Invalid data or duplicate NISN
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully registered student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StudentService::new(&state.db);

    let params = CreateStudentParams::from_dto(payload)?;

    let student = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Get paginated students with optional filters.
///
/// # Access Control
/// - `Admin` or `Teacher`; `include_inactive` additionally requires `Admin`
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("class_id" = Option<i32>, Query, description = "Filter by class"),
        ("major_id" = Option<i32>, Query, description = "Filter by major"),
        ("grade_level" = Option<i32>, Query, description = "Filter by grade level"),
        ("search" = Option<String>, Query, description = "Name substring or exact NISN"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated students (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = PaginatedStudentsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListStudentsParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.jwt, &headers);
    if params.include_inactive {
        let _ = guard.require(&[Role::Admin])?;
    } else {
        let _ = guard.require(&[Role::Admin, Role::Teacher])?;
    }

    let service = StudentService::new(&state.db);

    let students = service
        .get_paginated(
            params.page,
            params.entries,
            params.class_id,
            params.major_id,
            params.grade_level,
            params.search,
            params.include_inactive,
        )
        .await?;

    Ok((StatusCode::OK, Json(students.into_dto())))
}

/// Get a specific student by ID.
///
/// # Access Control
/// - `Admin` or `Teacher`
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin, Role::Teacher])?;

    let service = StudentService::new(&state.db);

    let student = service.get_by_id(id).await?;

    match student {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Update a student.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StudentService::new(&state.db);

    let params = UpdateStudentParams::from_dto(id, payload)?;

    let student = service.update(params).await?;

    match student {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Apply a bulk action to a set of students.
///
/// Supported actions: `change_semester` and `set_grade_level` (both take
/// `value`), and `promote_grade`, which increments each student's grade
/// level but never past the top grade. The response reports how many of the
/// submitted ids exist and how many rows actually changed.
///
/// # Access Control
/// - `Admin` - Only admins can run bulk actions
///
/// # Returns
/// - `200 OK` - Matched and updated counts
/// - `400 Bad Request` - Unknown action, missing value or out-of-range value
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students/bulk",
    tag = STUDENT_TAG,
    request_body = BulkStudentActionDto,
    responses(
        (status = 200, description = "Bulk action applied", body = BulkStudentResultDto),
        (status = 400, description = "Invalid bulk action", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_update_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BulkStudentActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StudentService::new(&state.db);

    let params = BulkStudentParams::from_dto(payload)?;

    let result = service.bulk_update(params).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Delete a student.
///
/// Rejected while grade records still reference the student.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 400, description = "Dependent records exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StudentService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Student not found".to_string()))
    }
}

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
        subject::{CreateSubjectDto, PaginatedSubjectsDto, SubjectDto, UpdateSubjectDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::subject::{CreateSubjectParams, UpdateSubjectParams},
        service::subject::SubjectService,
        state::AppState,
    },
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subject";

#[derive(Deserialize)]
pub struct ListSubjectsParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub major_id: Option<i32>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Create a new subject.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Successfully created subject", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = SubjectService::new(&state.db);

    let params = CreateSubjectParams::from_dto(payload)?;

    let subject = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(subject.into_dto())))
}

/// Get paginated subjects with optional major and semester filters.
///
/// # Access Control
/// - Any valid token; `include_inactive` additionally requires `Admin`
#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("major_id" = Option<i32>, Query, description = "Filter by major"),
        ("semester" = Option<i32>, Query, description = "Filter by semester"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated subjects (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subjects", body = PaginatedSubjectsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListSubjectsParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.jwt, &headers);
    if params.include_inactive {
        let _ = guard.require(&[Role::Admin])?;
    } else {
        let _ = guard.require(&[])?;
    }

    let service = SubjectService::new(&state.db);

    let subjects = service
        .get_paginated(
            params.page,
            params.entries,
            params.major_id,
            params.semester,
            params.include_inactive,
        )
        .await?;

    Ok((StatusCode::OK, Json(subjects.into_dto())))
}

/// Get a specific subject by ID.
///
/// # Access Control
/// - Any valid token
#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subject", body = SubjectDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let service = SubjectService::new(&state.db);

    let subject = service.get_by_id(id).await?;

    match subject {
        Some(subject) => Ok((StatusCode::OK, Json(subject.into_dto()))),
        None => Err(AppError::NotFound("Subject not found".to_string())),
    }
}

/// Update a subject.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Successfully updated subject", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = SubjectService::new(&state.db);

    let params = UpdateSubjectParams::from_dto(id, payload)?;

    let subject = service.update(params).await?;

    match subject {
        Some(subject) => Ok((StatusCode::OK, Json(subject.into_dto()))),
        None => Err(AppError::NotFound("Subject not found".to_string())),
    }
}

/// Soft-delete a subject.
///
/// Rejected while grades or schedules still reference the subject.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated subject"),
        (status = 400, description = "Dependent records exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = SubjectService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Subject not found".to_string()))
    }
}

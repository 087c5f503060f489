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
        schedule::{CreateScheduleDto, PaginatedSchedulesDto, ScheduleDto, UpdateScheduleDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::schedule::{CreateScheduleParams, UpdateScheduleParams},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize)]
pub struct ListSchedulesParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub class_id: Option<i32>,
    #[serde(default)]
    pub teacher_id: Option<i32>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Create a new schedule entry.
///
/// The write is rejected when another active schedule for the same class and
/// day overlaps the candidate time range under half-open semantics; the
/// conflict check and the insert run in one transaction.
///
/// # Access Control
/// - `Admin` - Only admins can create schedules
///
/// # Returns
/// - `201 Created` - Successfully created schedule
/// - `400 Bad Request` - Invalid data or overlapping schedule
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Successfully created schedule", body = ScheduleDto),
        (status = 400, description = "Invalid data or overlapping schedule", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = ScheduleService::new(&state.db);

    let params = CreateScheduleParams::from_dto(payload)?;

    let schedule = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// Get paginated schedules with optional class, teacher and day filters.
///
/// # Access Control
/// - Any valid token; `include_inactive` additionally requires `Admin`
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("class_id" = Option<i32>, Query, description = "Filter by class"),
        ("teacher_id" = Option<i32>, Query, description = "Filter by teacher"),
        ("day" = Option<String>, Query, description = "Filter by weekday name"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated schedules (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedules", body = PaginatedSchedulesDto),
        (status = 400, description = "Invalid day filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListSchedulesParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.jwt, &headers);
    if params.include_inactive {
        let _ = guard.require(&[Role::Admin])?;
    } else {
        let _ = guard.require(&[])?;
    }

    let service = ScheduleService::new(&state.db);

    let schedules = service
        .get_paginated(
            params.page,
            params.entries,
            params.class_id,
            params.teacher_id,
            params.day,
            params.include_inactive,
        )
        .await?;

    Ok((StatusCode::OK, Json(schedules.into_dto())))
}

/// Get a specific schedule by ID.
///
/// # Access Control
/// - Any valid token
#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved schedule", body = ScheduleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[])?;

    let service = ScheduleService::new(&state.db);

    let schedule = service.get_by_id(id).await?;

    match schedule {
        Some(schedule) => Ok((StatusCode::OK, Json(schedule.into_dto()))),
        None => Err(AppError::NotFound("Schedule not found".to_string())),
    }
}

/// Update a schedule entry.
///
/// The same overlap check as creation applies; the row being updated is
/// excluded so a schedule never conflicts with itself.
///
/// # Access Control
/// - `Admin` - Only admins can update schedules
///
/// # Returns
/// - `200 OK` - Successfully updated schedule
/// - `400 Bad Request` - Invalid data or overlapping schedule
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Valid token without the admin role
/// - `404 Not Found` - No schedule with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Schedule ID")
    ),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Successfully updated schedule", body = ScheduleDto),
        (status = 400, description = "Invalid data or overlapping schedule", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = ScheduleService::new(&state.db);

    let params = UpdateScheduleParams::from_dto(id, payload)?;

    let schedule = service.update(params).await?;

    match schedule {
        Some(schedule) => Ok((StatusCode::OK, Json(schedule.into_dto()))),
        None => Err(AppError::NotFound("Schedule not found".to_string())),
    }
}

/// Delete a schedule entry.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = i32, Path, description = "Schedule ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted schedule"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = ScheduleService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Schedule not found".to_string()))
    }
}

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
        announcement::{
            AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto,
            UpdateAnnouncementDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::announcement::{CreateAnnouncementParams, UpdateAnnouncementParams},
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

#[derive(Deserialize)]
pub struct ListAnnouncementsParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub category: Option<String>,
    /// Admin-only; includes drafts that have not been published.
    #[serde(default)]
    pub include_unpublished: bool,
}

/// Create an announcement.
///
/// Creating with `is_published: true` stamps `published_at` immediately.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Successfully created announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = AnnouncementService::new(&state.db);

    let params = CreateAnnouncementParams::from_dto(payload)?;

    let announcement = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Get paginated announcements, newest first.
///
/// Public listing; drafts are only visible to admins via
/// `include_unpublished`.
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("include_unpublished" = Option<bool>, Query, description = "Include drafts (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved announcements", body = PaginatedAnnouncementsDto),
        (status = 400, description = "Invalid category filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListAnnouncementsParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.include_unpublished {
        let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;
    }

    let service = AnnouncementService::new(&state.db);

    let announcements = service
        .get_paginated(
            params.page,
            params.entries,
            params.category,
            !params.include_unpublished,
        )
        .await?;

    Ok((StatusCode::OK, Json(announcements.into_dto())))
}

/// Get a specific announcement by ID.
#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved announcement", body = AnnouncementDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcement_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AnnouncementService::new(&state.db);

    let announcement = service.get_by_id(id).await?;

    match announcement {
        Some(announcement) => Ok((StatusCode::OK, Json(announcement.into_dto()))),
        None => Err(AppError::NotFound("Announcement not found".to_string())),
    }
}

/// Update an announcement.
///
/// Publishing for the first time stamps `published_at`; publishing again
/// leaves the original timestamp untouched.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Successfully updated announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAnnouncementDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = AnnouncementService::new(&state.db);

    let params = UpdateAnnouncementParams::from_dto(id, payload)?;

    let announcement = service.update(params).await?;

    match announcement {
        Some(announcement) => Ok((StatusCode::OK, Json(announcement.into_dto()))),
        None => Err(AppError::NotFound("Announcement not found".to_string())),
    }
}

/// Delete an announcement.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(
        ("id" = i32, Path, description = "Announcement ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted announcement"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = AnnouncementService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Announcement not found".to_string()))
    }
}

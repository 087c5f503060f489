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
        gallery::{
            CreateGalleryItemDto, GalleryItemDto, PaginatedGalleryItemsDto, UpdateGalleryItemDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::gallery::{CreateGalleryItemParams, UpdateGalleryItemParams},
        service::gallery::GalleryService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

#[derive(Deserialize)]
pub struct ListGalleryParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub include_unpublished: bool,
}

/// Add a gallery item.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    request_body = CreateGalleryItemDto,
    responses(
        (status = 201, description = "Successfully added gallery item", body = GalleryItemDto),
        (status = 400, description = "Invalid gallery data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_gallery_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGalleryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = GalleryService::new(&state.db);

    let params = CreateGalleryItemParams::from_dto(payload)?;

    let item = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Get paginated gallery items, newest first.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("include_unpublished" = Option<bool>, Query, description = "Include unpublished items (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved gallery items", body = PaginatedGalleryItemsDto),
        (status = 400, description = "Invalid category filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListGalleryParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.include_unpublished {
        let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;
    }

    let service = GalleryService::new(&state.db);

    let items = service
        .get_paginated(
            params.page,
            params.entries,
            params.category,
            !params.include_unpublished,
        )
        .await?;

    Ok((StatusCode::OK, Json(items.into_dto())))
}

/// Get a specific gallery item by ID.
#[utoipa::path(
    get,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved gallery item", body = GalleryItemDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_gallery_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GalleryService::new(&state.db);

    let item = service.get_by_id(id).await?;

    match item {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("Gallery item not found".to_string())),
    }
}

/// Update a gallery item.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery item ID")
    ),
    request_body = UpdateGalleryItemDto,
    responses(
        (status = 200, description = "Successfully updated gallery item", body = GalleryItemDto),
        (status = 400, description = "Invalid gallery data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_gallery_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGalleryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = GalleryService::new(&state.db);

    let params = UpdateGalleryItemParams::from_dto(id, payload)?;

    let item = service.update(params).await?;

    match item {
        Some(item) => Ok((StatusCode::OK, Json(item.into_dto()))),
        None => Err(AppError::NotFound("Gallery item not found".to_string())),
    }
}

/// Delete a gallery item.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = GALLERY_TAG,
    params(
        ("id" = i32, Path, description = "Gallery item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted gallery item"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Gallery item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = GalleryService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Gallery item not found".to_string()))
    }
}

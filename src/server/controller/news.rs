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
        news::{CreateNewsDto, NewsDto, PaginatedNewsDto, UpdateNewsDto},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::news::{CreateNewsParams, UpdateNewsParams},
        service::news::NewsService,
        state::AppState,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

#[derive(Deserialize)]
pub struct ListNewsParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub include_unpublished: bool,
}

/// Create a news article.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "Successfully created news article", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = NewsService::new(&state.db);

    let params = CreateNewsParams::from_dto(payload)?;

    let news = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// Get paginated news articles, newest first.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("include_unpublished" = Option<bool>, Query, description = "Include drafts (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved news", body = PaginatedNewsDto),
        (status = 400, description = "Invalid category filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListNewsParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.include_unpublished {
        let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;
    }

    let service = NewsService::new(&state.db);

    let news = service
        .get_paginated(
            params.page,
            params.entries,
            params.category,
            !params.include_unpublished,
        )
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Get a specific news article by ID.
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved news article", body = NewsDto),
        (status = 404, description = "News article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NewsService::new(&state.db);

    let news = service.get_by_id(id).await?;

    match news {
        Some(news) => Ok((StatusCode::OK, Json(news.into_dto()))),
        None => Err(AppError::NotFound("News article not found".to_string())),
    }
}

/// Update a news article.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "Successfully updated news article", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "News article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = NewsService::new(&state.db);

    let params = UpdateNewsParams::from_dto(id, payload)?;

    let news = service.update(params).await?;

    match news {
        Some(news) => Ok((StatusCode::OK, Json(news.into_dto()))),
        None => Err(AppError::NotFound("News article not found".to_string())),
    }
}

/// Delete a news article.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted news article"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "News article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = NewsService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("News article not found".to_string()))
    }
}

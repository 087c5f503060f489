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
        staff::{
            CreateStaffDto, OrganizationDto, PaginatedStaffDto, StaffDto, UpdateStaffDto,
        },
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Role},
        model::staff::{CreateStaffParams, UpdateStaffParams},
        service::staff::StaffService,
        state::AppState,
    },
};

/// Tag for grouping staff endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

#[derive(Deserialize)]
pub struct ListStaffParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Add a staff member.
///
/// Rejected with 400 when the new member would be a second active
/// headmaster.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = STAFF_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Successfully added staff member", body = StaffDto),
        (status = 400, description = "Invalid staff data or duplicate headmaster", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StaffService::new(&state.db);

    let params = CreateStaffParams::from_dto(payload)?;

    let staff = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(staff.into_dto())))
}

/// Get paginated staff ordered by display order.
///
/// Public listing for the staff page.
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = STAFF_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("include_inactive" = Option<bool>, Query, description = "Include deactivated staff (admin only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved staff", body = PaginatedStaffDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListStaffParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.include_inactive {
        let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;
    }

    let service = StaffService::new(&state.db);

    let staff = service
        .get_paginated(params.page, params.entries, params.include_inactive)
        .await?;

    Ok((StatusCode::OK, Json(staff.into_dto())))
}

/// Get the organization chart.
///
/// Groups active staff into headmaster, vice headmasters, teachers,
/// administration and support, each ordered by display order. Public
/// endpoint backing the organization page.
#[utoipa::path(
    get,
    path = "/api/staff/organization",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Organization chart", body = OrganizationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organization(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let organization = service.organization().await?;

    Ok((StatusCode::OK, Json(organization.into_dto())))
}

/// Get a specific staff member by ID.
#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved staff member", body = StaffDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff = service.get_by_id(id).await?;

    match staff {
        Some(staff) => Ok((StatusCode::OK, Json(staff.into_dto()))),
        None => Err(AppError::NotFound("Staff member not found".to_string())),
    }
}

/// Update a staff member.
///
/// The single-active-headmaster rule applies here as well; promoting a
/// second member to headmaster while one is active is rejected.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Successfully updated staff member", body = StaffDto),
        (status = 400, description = "Invalid staff data or duplicate headmaster", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StaffService::new(&state.db);

    let params = UpdateStaffParams::from_dto(id, payload)?;

    let staff = service.update(params).await?;

    match staff {
        Some(staff) => Ok((StatusCode::OK, Json(staff.into_dto()))),
        None => Err(AppError::NotFound("Staff member not found".to_string())),
    }
}

/// Soft-delete a staff member.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(
        ("id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 204, description = "Successfully deactivated staff member"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Role::Admin])?;

    let service = StaffService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Staff member not found".to_string()))
    }
}

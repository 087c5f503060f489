//! Academic major domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::major::{CreateMajorDto, MajorDto, PaginatedMajorsDto, UpdateMajorDto},
    server::error::AppError,
};

#[derive(Debug, Clone)]
pub struct Major {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: String,
    pub image_url: Option<String>,
    pub facilities: Vec<String>,
    pub career_prospects: Vec<String>,
    pub total_students: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Major {
    /// Converts the entity model to a domain model at the repository boundary.
    ///
    /// The JSON list columns tolerate malformed content and fall back to an
    /// empty list rather than failing the whole read.
    pub fn from_entity(entity: entity::major::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            description: entity.description,
            image_url: entity.image_url,
            facilities: json_string_list(entity.facilities),
            career_prospects: json_string_list(entity.career_prospects),
            total_students: entity.total_students,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MajorDto {
        MajorDto {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            image_url: self.image_url,
            facilities: self.facilities,
            career_prospects: self.career_prospects,
            total_students: self.total_students,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn json_string_list(value: sea_orm::prelude::Json) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct CreateMajorParams {
    pub name: String,
    pub code: String,
    pub description: String,
    pub image_url: Option<String>,
    pub facilities: Vec<String>,
    pub career_prospects: Vec<String>,
    pub total_students: i32,
    pub is_active: bool,
}

impl CreateMajorParams {
    pub fn from_dto(dto: CreateMajorDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.code, dto.total_students)?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            description: dto.description,
            image_url: dto.image_url,
            facilities: dto.facilities,
            career_prospects: dto.career_prospects,
            total_students: dto.total_students,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateMajorParams {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: String,
    pub image_url: Option<String>,
    pub facilities: Vec<String>,
    pub career_prospects: Vec<String>,
    pub total_students: i32,
    pub is_active: bool,
}

impl UpdateMajorParams {
    pub fn from_dto(id: i32, dto: UpdateMajorDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.code, dto.total_students)?;

        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            description: dto.description,
            image_url: dto.image_url,
            facilities: dto.facilities,
            career_prospects: dto.career_prospects,
            total_students: dto.total_students,
            is_active: dto.is_active,
        })
    }
}

fn validate_fields(name: &str, code: &str, total_students: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if code.trim().is_empty() {
        return Err(AppError::BadRequest("code is required".to_string()));
    }
    if total_students < 0 {
        return Err(AppError::BadRequest(
            "total_students must not be negative".to_string(),
        ));
    }

    Ok(())
}

/// Paginated major listing with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedMajors {
    pub majors: Vec<Major>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMajors {
    pub fn into_dto(self) -> PaginatedMajorsDto {
        PaginatedMajorsDto {
            majors: self.majors.into_iter().map(|m| m.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

//! Teacher domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::teacher::{CreateTeacherDto, PaginatedTeachersDto, TeacherDto, UpdateTeacherDto},
    server::error::AppError,
};

#[derive(Debug, Clone)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub nip: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            nip: entity.nip,
            email: entity.email,
            phone: entity.phone,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            name: self.name,
            nip: self.nip,
            email: self.email,
            phone: self.phone,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeacherParams {
    pub name: String,
    pub nip: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl CreateTeacherParams {
    pub fn from_dto(dto: CreateTeacherDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.nip)?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            nip: dto.nip.trim().to_string(),
            email: dto.email,
            phone: dto.phone,
            image_url: dto.image_url,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeacherParams {
    pub id: i32,
    pub name: String,
    pub nip: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl UpdateTeacherParams {
    pub fn from_dto(id: i32, dto: UpdateTeacherDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.nip)?;

        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            nip: dto.nip.trim().to_string(),
            email: dto.email,
            phone: dto.phone,
            image_url: dto.image_url,
            is_active: dto.is_active,
        })
    }
}

fn validate_fields(name: &str, nip: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if nip.trim().is_empty() {
        return Err(AppError::BadRequest("nip is required".to_string()));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PaginatedTeachers {
    pub teachers: Vec<Teacher>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTeachers {
    pub fn into_dto(self) -> PaginatedTeachersDto {
        PaginatedTeachersDto {
            teachers: self.teachers.into_iter().map(|t| t.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

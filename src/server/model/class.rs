//! Class domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::class::{ClassDto, CreateClassDto, PaginatedClassesDto, UpdateClassDto},
    server::{
        error::AppError,
        model::{GRADE_LEVEL_MAX, GRADE_LEVEL_MIN},
    },
};

#[derive(Debug, Clone)]
pub struct Class {
    pub id: i32,
    pub name: String,
    pub major_id: i32,
    pub major_name: String,
    pub homeroom_teacher_id: Option<i32>,
    pub homeroom_teacher_name: Option<String>,
    pub grade_level: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Class {
    pub fn from_related(
        entity: entity::class::Model,
        major: Option<entity::major::Model>,
        homeroom_teacher: Option<entity::teacher::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            major_id: entity.major_id,
            major_name: major.map(|m| m.name).unwrap_or_else(|| "Unknown".to_string()),
            homeroom_teacher_id: entity.homeroom_teacher_id,
            homeroom_teacher_name: homeroom_teacher.map(|t| t.name),
            grade_level: entity.grade_level,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            name: self.name,
            major_id: self.major_id,
            major_name: self.major_name,
            homeroom_teacher_id: self.homeroom_teacher_id,
            homeroom_teacher_name: self.homeroom_teacher_name,
            grade_level: self.grade_level,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateClassParams {
    pub name: String,
    pub major_id: i32,
    pub homeroom_teacher_id: Option<i32>,
    pub grade_level: i32,
    pub is_active: bool,
}

impl CreateClassParams {
    pub fn from_dto(dto: CreateClassDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, dto.grade_level)?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            major_id: dto.major_id,
            homeroom_teacher_id: dto.homeroom_teacher_id,
            grade_level: dto.grade_level,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClassParams {
    pub id: i32,
    pub name: String,
    pub major_id: i32,
    pub homeroom_teacher_id: Option<i32>,
    pub grade_level: i32,
    pub is_active: bool,
}

impl UpdateClassParams {
    pub fn from_dto(id: i32, dto: UpdateClassDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, dto.grade_level)?;

        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            major_id: dto.major_id,
            homeroom_teacher_id: dto.homeroom_teacher_id,
            grade_level: dto.grade_level,
            is_active: dto.is_active,
        })
    }
}

fn validate_fields(name: &str, grade_level: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if !(GRADE_LEVEL_MIN..=GRADE_LEVEL_MAX).contains(&grade_level) {
        return Err(AppError::BadRequest(format!(
            "grade_level must be between {} and {}",
            GRADE_LEVEL_MIN, GRADE_LEVEL_MAX
        )));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PaginatedClasses {
    pub classes: Vec<Class>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedClasses {
    pub fn into_dto(self) -> PaginatedClassesDto {
        PaginatedClassesDto {
            classes: self.classes.into_iter().map(|c| c.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

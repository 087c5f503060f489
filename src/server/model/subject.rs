//! Subject domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::subject::{CreateSubjectDto, PaginatedSubjectsDto, SubjectDto, UpdateSubjectDto},
    server::{
        error::AppError,
        model::{SEMESTER_MAX, SEMESTER_MIN},
    },
};

#[derive(Debug, Clone)]
pub struct Subject {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub credits: i32,
    pub major_id: i32,
    pub major_name: String,
    pub teacher_id: Option<i32>,
    pub teacher_name: Option<String>,
    pub semester: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subject {
    /// Converts entity models to a domain model, enriching with the owning
    /// major's and assigned teacher's display names.
    pub fn from_related(
        entity: entity::subject::Model,
        major: Option<entity::major::Model>,
        teacher: Option<entity::teacher::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            description: entity.description,
            credits: entity.credits,
            major_id: entity.major_id,
            major_name: major.map(|m| m.name).unwrap_or_else(|| "Unknown".to_string()),
            teacher_id: entity.teacher_id,
            teacher_name: teacher.map(|t| t.name),
            semester: entity.semester,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.id,
            name: self.name,
            code: self.code,
            description: self.description,
            credits: self.credits,
            major_id: self.major_id,
            major_name: self.major_name,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            semester: self.semester,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSubjectParams {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub credits: i32,
    pub major_id: i32,
    pub teacher_id: Option<i32>,
    pub semester: i32,
    pub is_active: bool,
}

impl CreateSubjectParams {
    pub fn from_dto(dto: CreateSubjectDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.code, dto.credits, dto.semester)?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            description: dto.description,
            credits: dto.credits,
            major_id: dto.major_id,
            teacher_id: dto.teacher_id,
            semester: dto.semester,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubjectParams {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub credits: i32,
    pub major_id: i32,
    pub teacher_id: Option<i32>,
    pub semester: i32,
    pub is_active: bool,
}

impl UpdateSubjectParams {
    pub fn from_dto(id: i32, dto: UpdateSubjectDto) -> Result<Self, AppError> {
        validate_fields(&dto.name, &dto.code, dto.credits, dto.semester)?;

        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            description: dto.description,
            credits: dto.credits,
            major_id: dto.major_id,
            teacher_id: dto.teacher_id,
            semester: dto.semester,
            is_active: dto.is_active,
        })
    }
}

fn validate_fields(name: &str, code: &str, credits: i32, semester: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if code.trim().is_empty() {
        return Err(AppError::BadRequest("code is required".to_string()));
    }
    if credits < 1 {
        return Err(AppError::BadRequest(
            "credits must be at least 1".to_string(),
        ));
    }
    if !(SEMESTER_MIN..=SEMESTER_MAX).contains(&semester) {
        return Err(AppError::BadRequest(format!(
            "semester must be between {} and {}",
            SEMESTER_MIN, SEMESTER_MAX
        )));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PaginatedSubjects {
    pub subjects: Vec<Subject>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSubjects {
    pub fn into_dto(self) -> PaginatedSubjectsDto {
        PaginatedSubjectsDto {
            subjects: self.subjects.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

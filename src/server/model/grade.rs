//! Grade domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::grade::{CreateGradeDto, GradeDto, PaginatedGradesDto, UpdateGradeDto},
    server::{
        error::AppError,
        model::{SEMESTER_MAX, SEMESTER_MIN},
    },
};

#[derive(Debug, Clone)]
pub struct Grade {
    pub id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub semester: i32,
    pub score: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Grade {
    pub fn from_related(
        entity: entity::grade::Model,
        student: Option<entity::student::Model>,
        subject: Option<entity::subject::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            student_name: student
                .map(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            subject_id: entity.subject_id,
            subject_name: subject
                .map(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            semester: entity.semester,
            score: entity.score,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GradeDto {
        GradeDto {
            id: self.id,
            student_id: self.student_id,
            student_name: self.student_name,
            subject_id: self.subject_id,
            subject_name: self.subject_name,
            semester: self.semester,
            score: self.score,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGradeParams {
    pub student_id: i32,
    pub subject_id: i32,
    pub semester: i32,
    pub score: f64,
    pub notes: Option<String>,
}

impl CreateGradeParams {
    pub fn from_dto(dto: CreateGradeDto) -> Result<Self, AppError> {
        validate_fields(dto.semester, dto.score)?;

        Ok(Self {
            student_id: dto.student_id,
            subject_id: dto.subject_id,
            semester: dto.semester,
            score: dto.score,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGradeParams {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub semester: i32,
    pub score: f64,
    pub notes: Option<String>,
}

impl UpdateGradeParams {
    pub fn from_dto(id: i32, dto: UpdateGradeDto) -> Result<Self, AppError> {
        validate_fields(dto.semester, dto.score)?;

        Ok(Self {
            id,
            student_id: dto.student_id,
            subject_id: dto.subject_id,
            semester: dto.semester,
            score: dto.score,
            notes: dto.notes,
        })
    }
}

fn validate_fields(semester: i32, score: f64) -> Result<(), AppError> {
    if !(SEMESTER_MIN..=SEMESTER_MAX).contains(&semester) {
        return Err(AppError::BadRequest(format!(
            "semester must be between {} and {}",
            SEMESTER_MIN, SEMESTER_MAX
        )));
    }
    if !(0.0..=100.0).contains(&score) {
        return Err(AppError::BadRequest(
            "score must be between 0 and 100".to_string(),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PaginatedGrades {
    pub grades: Vec<Grade>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedGrades {
    pub fn into_dto(self) -> PaginatedGradesDto {
        PaginatedGradesDto {
            grades: self.grades.into_iter().map(|g| g.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

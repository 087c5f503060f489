//! Student domain models, parameters and bulk-action types.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{
        BulkStudentActionDto, BulkStudentResultDto, CreateStudentDto, PaginatedStudentsDto,
        StudentDto, UpdateStudentDto,
    },
    server::{
        error::AppError,
        model::{GRADE_LEVEL_MAX, GRADE_LEVEL_MIN, SEMESTER_MAX, SEMESTER_MIN},
    },
};

#[derive(Debug, Clone)]
pub struct Student {
    pub id: i32,
    pub nisn: String,
    pub name: String,
    pub class_id: Option<i32>,
    pub class_name: Option<String>,
    pub major_id: i32,
    pub major_name: String,
    pub semester: i32,
    pub grade_level: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    pub fn from_related(
        entity: entity::student::Model,
        class: Option<entity::class::Model>,
        major: Option<entity::major::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            nisn: entity.nisn,
            name: entity.name,
            class_id: entity.class_id,
            class_name: class.map(|c| c.name),
            major_id: entity.major_id,
            major_name: major.map(|m| m.name).unwrap_or_else(|| "Unknown".to_string()),
            semester: entity.semester,
            grade_level: entity.grade_level,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            nisn: self.nisn,
            name: self.name,
            class_id: self.class_id,
            class_name: self.class_name,
            major_id: self.major_id,
            major_name: self.major_name,
            semester: self.semester,
            grade_level: self.grade_level,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub nisn: String,
    pub name: String,
    pub class_id: Option<i32>,
    pub major_id: i32,
    pub semester: i32,
    pub grade_level: i32,
    pub is_active: bool,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        validate_fields(&dto.nisn, &dto.name, dto.semester, dto.grade_level)?;

        Ok(Self {
            nisn: dto.nisn.trim().to_string(),
            name: dto.name.trim().to_string(),
            class_id: dto.class_id,
            major_id: dto.major_id,
            semester: dto.semester,
            grade_level: dto.grade_level,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub nisn: String,
    pub name: String,
    pub class_id: Option<i32>,
    pub major_id: i32,
    pub semester: i32,
    pub grade_level: i32,
    pub is_active: bool,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Result<Self, AppError> {
        validate_fields(&dto.nisn, &dto.name, dto.semester, dto.grade_level)?;

        Ok(Self {
            id,
            nisn: dto.nisn.trim().to_string(),
            name: dto.name.trim().to_string(),
            class_id: dto.class_id,
            major_id: dto.major_id,
            semester: dto.semester,
            grade_level: dto.grade_level,
            is_active: dto.is_active,
        })
    }
}

fn validate_fields(nisn: &str, name: &str, semester: i32, grade_level: i32) -> Result<(), AppError> {
    if nisn.trim().is_empty() {
        return Err(AppError::BadRequest("nisn is required".to_string()));
    }
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if !(SEMESTER_MIN..=SEMESTER_MAX).contains(&semester) {
        return Err(AppError::BadRequest(format!(
            "semester must be between {} and {}",
            SEMESTER_MIN, SEMESTER_MAX
        )));
    }
    if !(GRADE_LEVEL_MIN..=GRADE_LEVEL_MAX).contains(&grade_level) {
        return Err(AppError::BadRequest(format!(
            "grade_level must be between {} and {}",
            GRADE_LEVEL_MIN, GRADE_LEVEL_MAX
        )));
    }

    Ok(())
}

/// A validated bulk mutation applied to a set of students.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkStudentAction {
    ChangeSemester(i32),
    SetGradeLevel(i32),
    /// Increments grade level by one, clamped at `GRADE_LEVEL_MAX`.
    PromoteGrade,
}

#[derive(Debug, Clone)]
pub struct BulkStudentParams {
    pub student_ids: Vec<i32>,
    pub action: BulkStudentAction,
}

impl BulkStudentParams {
    pub fn from_dto(dto: BulkStudentActionDto) -> Result<Self, AppError> {
        if dto.student_ids.is_empty() {
            return Err(AppError::BadRequest(
                "student_ids must not be empty".to_string(),
            ));
        }

        let action = match dto.action.as_str() {
            "change_semester" => {
                let semester = dto.value.ok_or_else(|| {
                    AppError::BadRequest("value is required for change_semester".to_string())
                })?;
                if !(SEMESTER_MIN..=SEMESTER_MAX).contains(&semester) {
                    return Err(AppError::BadRequest(format!(
                        "semester must be between {} and {}",
                        SEMESTER_MIN, SEMESTER_MAX
                    )));
                }
                BulkStudentAction::ChangeSemester(semester)
            }
            "set_grade_level" => {
                let grade_level = dto.value.ok_or_else(|| {
                    AppError::BadRequest("value is required for set_grade_level".to_string())
                })?;
                if !(GRADE_LEVEL_MIN..=GRADE_LEVEL_MAX).contains(&grade_level) {
                    return Err(AppError::BadRequest(format!(
                        "grade_level must be between {} and {}",
                        GRADE_LEVEL_MIN, GRADE_LEVEL_MAX
                    )));
                }
                BulkStudentAction::SetGradeLevel(grade_level)
            }
            "promote_grade" => BulkStudentAction::PromoteGrade,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unknown bulk action '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            student_ids: dto.student_ids,
            action,
        })
    }
}

/// Outcome of a bulk mutation.
///
/// `matched` counts how many submitted ids exist; `updated` counts rows the
/// database actually changed. The two differ when `promote_grade` skips
/// students already at the top grade.
#[derive(Debug, Clone)]
pub struct BulkStudentResult {
    pub matched: u64,
    pub updated: u64,
}

impl BulkStudentResult {
    pub fn into_dto(self) -> BulkStudentResultDto {
        BulkStudentResultDto {
            matched: self.matched,
            updated: self.updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedStudents {
    pub students: Vec<Student>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStudents {
    pub fn into_dto(self) -> PaginatedStudentsDto {
        PaginatedStudentsDto {
            students: self.students.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

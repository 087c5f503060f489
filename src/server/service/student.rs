use sea_orm::DatabaseConnection;

use crate::server::{
    data::{class::ClassRepository, major::MajorRepository, student::StudentRepository},
    error::AppError,
    model::{
        student::{
            BulkStudentAction, BulkStudentParams, BulkStudentResult, CreateStudentParams,
            PaginatedStudents, Student, UpdateStudentParams,
        },
        GRADE_LEVEL_MAX,
    },
    service::total_pages,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        self.check_references(params.major_id, params.class_id)
            .await?;

        let repo = StudentRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        class_id: Option<i32>,
        major_id: Option<i32>,
        grade_level: Option<i32>,
        search: Option<String>,
        include_inactive: bool,
    ) -> Result<PaginatedStudents, AppError> {
        let repo = StudentRepository::new(self.db);

        let (students, total) = repo
            .get_paginated(
                page,
                per_page,
                class_id,
                major_id,
                grade_level,
                search.as_deref(),
                include_inactive,
            )
            .await?;

        Ok(PaginatedStudents {
            students,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a student
    /// Returns None if the student doesn't exist
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        self.check_references(params.major_id, params.class_id)
            .await?;

        let repo = StudentRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a student after the dependency guard.
    ///
    /// Returns false if the student doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let grades = repo.count_dependent_grades(id).await?;
        if grades > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete student: {} grade record(s) still reference it",
                grades
            )));
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Applies a bulk action to a set of students.
    ///
    /// `change_semester` and `set_grade_level` update every matching student
    /// unconditionally. `promote_grade` increments the grade level but never
    /// past `GRADE_LEVEL_MAX`; students already at the top grade are skipped,
    /// which shows up as `updated < matched` in the result.
    pub async fn bulk_update(&self, params: BulkStudentParams) -> Result<BulkStudentResult, AppError> {
        let repo = StudentRepository::new(self.db);

        let matched = repo.count_existing(&params.student_ids).await?;

        let updated = match params.action {
            BulkStudentAction::ChangeSemester(semester) => {
                repo.set_semester(&params.student_ids, semester).await?
            }
            BulkStudentAction::SetGradeLevel(grade_level) => {
                repo.set_grade_level(&params.student_ids, grade_level).await?
            }
            BulkStudentAction::PromoteGrade => {
                repo.promote_grade(&params.student_ids, GRADE_LEVEL_MAX)
                    .await?
            }
        };

        Ok(BulkStudentResult { matched, updated })
    }

    async fn check_references(
        &self,
        major_id: i32,
        class_id: Option<i32>,
    ) -> Result<(), AppError> {
        if !MajorRepository::new(self.db).exists(major_id).await? {
            return Err(AppError::BadRequest(format!(
                "major_id {} does not reference an existing major",
                major_id
            )));
        }

        if let Some(class_id) = class_id {
            if !ClassRepository::new(self.db).exists(class_id).await? {
                return Err(AppError::BadRequest(format!(
                    "class_id {} does not reference an existing class",
                    class_id
                )));
            }
        }

        Ok(())
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{major::MajorRepository, subject::SubjectRepository, teacher::TeacherRepository},
    error::AppError,
    model::subject::{CreateSubjectParams, PaginatedSubjects, Subject, UpdateSubjectParams},
    service::total_pages,
};

pub struct SubjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new subject after verifying its references.
    pub async fn create(&self, params: CreateSubjectParams) -> Result<Subject, AppError> {
        self.check_references(params.major_id, params.teacher_id)
            .await?;

        let repo = SubjectRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Subject>, AppError> {
        let repo = SubjectRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        major_id: Option<i32>,
        semester: Option<i32>,
        include_inactive: bool,
    ) -> Result<PaginatedSubjects, AppError> {
        let repo = SubjectRepository::new(self.db);

        let (subjects, total) = repo
            .get_paginated(page, per_page, major_id, semester, include_inactive)
            .await?;

        Ok(PaginatedSubjects {
            subjects,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a subject after verifying its references.
    /// Returns None if the subject doesn't exist
    pub async fn update(&self, params: UpdateSubjectParams) -> Result<Option<Subject>, AppError> {
        self.check_references(params.major_id, params.teacher_id)
            .await?;

        let repo = SubjectRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a subject after the dependency guard.
    ///
    /// Grades and schedules keep referencing old subjects, so the delete is
    /// rejected while any exist. Returns false if the subject doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SubjectRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let grades = repo.count_dependent_grades(id).await?;
        let schedules = repo.count_dependent_schedules(id).await?;

        let dependents = grades + schedules;
        if dependents > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete subject: {} dependent record(s) still reference it",
                dependents
            )));
        }

        repo.deactivate(id).await?;

        Ok(true)
    }

    async fn check_references(
        &self,
        major_id: i32,
        teacher_id: Option<i32>,
    ) -> Result<(), AppError> {
        if !MajorRepository::new(self.db).exists(major_id).await? {
            return Err(AppError::BadRequest(format!(
                "major_id {} does not reference an existing major",
                major_id
            )));
        }

        if let Some(teacher_id) = teacher_id {
            if !TeacherRepository::new(self.db).exists(teacher_id).await? {
                return Err(AppError::BadRequest(format!(
                    "teacher_id {} does not reference an existing teacher",
                    teacher_id
                )));
            }
        }

        Ok(())
    }
}

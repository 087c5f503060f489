use sea_orm::DatabaseConnection;

use crate::server::{
    data::teacher::TeacherRepository,
    error::AppError,
    model::teacher::{CreateTeacherParams, PaginatedTeachers, Teacher, UpdateTeacherParams},
    service::total_pages,
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, AppError> {
        let repo = TeacherRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, AppError> {
        let repo = TeacherRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<PaginatedTeachers, AppError> {
        let repo = TeacherRepository::new(self.db);

        let (teachers, total) = repo.get_paginated(page, per_page, include_inactive).await?;

        Ok(PaginatedTeachers {
            teachers,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a teacher
    /// Returns None if the teacher doesn't exist
    pub async fn update(&self, params: UpdateTeacherParams) -> Result<Option<Teacher>, AppError> {
        let repo = TeacherRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a teacher after the dependency guard.
    ///
    /// Returns false if the teacher doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = TeacherRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let subjects = repo.count_dependent_subjects(id).await?;
        let homerooms = repo.count_dependent_homerooms(id).await?;
        let schedules = repo.count_dependent_schedules(id).await?;

        let dependents = subjects + homerooms + schedules;
        if dependents > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete teacher: {} dependent record(s) still reference it",
                dependents
            )));
        }

        repo.deactivate(id).await?;

        Ok(true)
    }
}

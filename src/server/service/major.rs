use sea_orm::DatabaseConnection;

use crate::server::{
    data::major::MajorRepository,
    error::AppError,
    model::major::{CreateMajorParams, Major, PaginatedMajors, UpdateMajorParams},
    service::total_pages,
};

pub struct MajorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MajorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new major
    pub async fn create(&self, params: CreateMajorParams) -> Result<Major, AppError> {
        let repo = MajorRepository::new(self.db);

        let major = repo.create(params).await?;

        Ok(major)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Major>, AppError> {
        let repo = MajorRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<PaginatedMajors, AppError> {
        let repo = MajorRepository::new(self.db);

        let (majors, total) = repo.get_paginated(page, per_page, include_inactive).await?;

        Ok(PaginatedMajors {
            majors,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a major
    /// Returns None if the major doesn't exist
    pub async fn update(&self, params: UpdateMajorParams) -> Result<Option<Major>, AppError> {
        let repo = MajorRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a major after the dependency guard.
    ///
    /// Students, subjects and classes keep a major id by convention rather
    /// than cascade, so the delete is rejected while any of them still
    /// reference the row. Returns false if the major doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MajorRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let students = repo.count_dependent_students(id).await?;
        let subjects = repo.count_dependent_subjects(id).await?;
        let classes = repo.count_dependent_classes(id).await?;

        let dependents = students + subjects + classes;
        if dependents > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete major: {} dependent record(s) still reference it",
                dependents
            )));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

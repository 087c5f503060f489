use sea_orm::DatabaseConnection;

use crate::server::{
    data::{class::ClassRepository, major::MajorRepository, teacher::TeacherRepository},
    error::AppError,
    model::class::{Class, CreateClassParams, PaginatedClasses, UpdateClassParams},
    service::total_pages,
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateClassParams) -> Result<Class, AppError> {
        self.check_references(params.major_id, params.homeroom_teacher_id)
            .await?;

        let repo = ClassRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Class>, AppError> {
        let repo = ClassRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        major_id: Option<i32>,
        grade_level: Option<i32>,
        include_inactive: bool,
    ) -> Result<PaginatedClasses, AppError> {
        let repo = ClassRepository::new(self.db);

        let (classes, total) = repo
            .get_paginated(page, per_page, major_id, grade_level, include_inactive)
            .await?;

        Ok(PaginatedClasses {
            classes,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a class
    /// Returns None if the class doesn't exist
    pub async fn update(&self, params: UpdateClassParams) -> Result<Option<Class>, AppError> {
        self.check_references(params.major_id, params.homeroom_teacher_id)
            .await?;

        let repo = ClassRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a class after the dependency guard.
    ///
    /// Returns false if the class doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ClassRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let students = repo.count_dependent_students(id).await?;
        let schedules = repo.count_dependent_schedules(id).await?;

        let dependents = students + schedules;
        if dependents > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete class: {} dependent record(s) still reference it",
                dependents
            )));
        }

        repo.deactivate(id).await?;

        Ok(true)
    }

    async fn check_references(
        &self,
        major_id: i32,
        homeroom_teacher_id: Option<i32>,
    ) -> Result<(), AppError> {
        if !MajorRepository::new(self.db).exists(major_id).await? {
            return Err(AppError::BadRequest(format!(
                "major_id {} does not reference an existing major",
                major_id
            )));
        }

        if let Some(teacher_id) = homeroom_teacher_id {
            if !TeacherRepository::new(self.db).exists(teacher_id).await? {
                return Err(AppError::BadRequest(format!(
                    "homeroom_teacher_id {} does not reference an existing teacher",
                    teacher_id
                )));
            }
        }

        Ok(())
    }
}

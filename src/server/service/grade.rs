use sea_orm::DatabaseConnection;

use crate::server::{
    data::{grade::GradeRepository, student::StudentRepository, subject::SubjectRepository},
    error::AppError,
    model::grade::{CreateGradeParams, Grade, PaginatedGrades, UpdateGradeParams},
    service::total_pages,
};

pub struct GradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGradeParams) -> Result<Grade, AppError> {
        self.check_references(params.student_id, params.subject_id)
            .await?;

        let repo = GradeRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Grade>, AppError> {
        let repo = GradeRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        student_id: Option<i32>,
        subject_id: Option<i32>,
        semester: Option<i32>,
    ) -> Result<PaginatedGrades, AppError> {
        let repo = GradeRepository::new(self.db);

        let (grades, total) = repo
            .get_paginated(page, per_page, student_id, subject_id, semester)
            .await?;

        Ok(PaginatedGrades {
            grades,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a grade
    /// Returns None if the grade doesn't exist
    pub async fn update(&self, params: UpdateGradeParams) -> Result<Option<Grade>, AppError> {
        self.check_references(params.student_id, params.subject_id)
            .await?;

        let repo = GradeRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a grade
    /// Returns false if the grade doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = GradeRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn check_references(&self, student_id: i32, subject_id: i32) -> Result<(), AppError> {
        if !StudentRepository::new(self.db).exists(student_id).await? {
            return Err(AppError::BadRequest(format!(
                "student_id {} does not reference an existing student",
                student_id
            )));
        }
        if !SubjectRepository::new(self.db).exists(subject_id).await? {
            return Err(AppError::BadRequest(format!(
                "subject_id {} does not reference an existing subject",
                subject_id
            )));
        }

        Ok(())
    }
}

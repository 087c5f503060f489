//! Grade factory for creating test grade entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test grades with customizable fields.
///
/// Defaults:
/// - semester: `1`
/// - score: `80.0`
pub struct GradeFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    subject_id: i32,
    semester: i32,
    score: f64,
}

impl<'a> GradeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, student_id: i32, subject_id: i32) -> Self {
        Self {
            db,
            student_id,
            subject_id,
            semester: 1,
            score: 80.0,
        }
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the grade entity into the database.
    pub async fn build(self) -> Result<entity::grade::Model, DbErr> {
        let now = Utc::now();
        entity::grade::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            subject_id: ActiveValue::Set(self.subject_id),
            semester: ActiveValue::Set(self.semester),
            score: ActiveValue::Set(self.score),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a grade for the given student and subject with default values.
pub async fn create_grade(
    db: &DatabaseConnection,
    student_id: i32,
    subject_id: i32,
) -> Result<entity::grade::Model, DbErr> {
    GradeFactory::new(db, student_id, subject_id).build().await
}

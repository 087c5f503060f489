//! Subject factory for creating test subject entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects with customizable fields.
///
/// Defaults:
/// - name: `"Subject {id}"` where id is auto-incremented
/// - code: `"SBJ{id}"`
/// - credits: `2`
/// - semester: `1`
/// - teacher_id: `None`
/// - is_active: `true`
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    credits: i32,
    major_id: i32,
    teacher_id: Option<i32>,
    semester: i32,
    is_active: bool,
}

impl<'a> SubjectFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, major_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Subject {}", id),
            code: format!("SBJ{}", id),
            credits: 2,
            major_id,
            teacher_id: None,
            semester: 1,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    pub fn teacher_id(mut self, teacher_id: Option<i32>) -> Self {
        self.teacher_id = teacher_id;
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the subject entity into the database.
    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        let now = Utc::now();
        entity::subject::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            description: ActiveValue::Set(None),
            credits: ActiveValue::Set(self.credits),
            major_id: ActiveValue::Set(self.major_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            semester: ActiveValue::Set(self.semester),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject in the given major with default values.
pub async fn create_subject(
    db: &DatabaseConnection,
    major_id: i32,
) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db, major_id).build().await
}

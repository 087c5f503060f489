//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Defaults:
/// - nisn: `"00{id}"` where id is auto-incremented
/// - name: `"Student {id}"`
/// - class_id: `None`
/// - semester: `1`
/// - grade_level: `10`
/// - is_active: `true`
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    nisn: String,
    name: String,
    class_id: Option<i32>,
    major_id: i32,
    semester: i32,
    grade_level: i32,
    is_active: bool,
}

impl<'a> StudentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, major_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            nisn: format!("00{}", id),
            name: format!("Student {}", id),
            class_id: None,
            major_id,
            semester: 1,
            grade_level: 10,
            is_active: true,
        }
    }

    pub fn nisn(mut self, nisn: impl Into<String>) -> Self {
        self.nisn = nisn.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn class_id(mut self, class_id: Option<i32>) -> Self {
        self.class_id = class_id;
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub fn grade_level(mut self, grade_level: i32) -> Self {
        self.grade_level = grade_level;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now();
        entity::student::ActiveModel {
            nisn: ActiveValue::Set(self.nisn),
            name: ActiveValue::Set(self.name),
            class_id: ActiveValue::Set(self.class_id),
            major_id: ActiveValue::Set(self.major_id),
            semester: ActiveValue::Set(self.semester),
            grade_level: ActiveValue::Set(self.grade_level),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student in the given major with default values.
pub async fn create_student(
    db: &DatabaseConnection,
    major_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, major_id).build().await
}

//! Class factory for creating test class entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
///
/// Defaults:
/// - name: `"Class {id}"` where id is auto-incremented
/// - homeroom_teacher_id: `None`
/// - grade_level: `10`
/// - is_active: `true`
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    major_id: i32,
    homeroom_teacher_id: Option<i32>,
    grade_level: i32,
    is_active: bool,
}

impl<'a> ClassFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, major_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Class {}", id),
            major_id,
            homeroom_teacher_id: None,
            grade_level: 10,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn homeroom_teacher_id(mut self, homeroom_teacher_id: Option<i32>) -> Self {
        self.homeroom_teacher_id = homeroom_teacher_id;
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

    /// Builds and inserts the class entity into the database.
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        let now = Utc::now();
        entity::class::ActiveModel {
            name: ActiveValue::Set(self.name),
            major_id: ActiveValue::Set(self.major_id),
            homeroom_teacher_id: ActiveValue::Set(self.homeroom_teacher_id),
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

/// Creates a class in the given major with default values.
pub async fn create_class(
    db: &DatabaseConnection,
    major_id: i32,
) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db, major_id).build().await
}

//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
///
/// Defaults:
/// - name: `"Teacher {id}"` where id is auto-incremented
/// - nip: `"19{id}"`
/// - is_active: `true`
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    nip: String,
    is_active: bool,
}

impl<'a> TeacherFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Teacher {}", id),
            nip: format!("19{}", id),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nip(mut self, nip: impl Into<String>) -> Self {
        self.nip = nip.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the teacher entity into the database.
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        let now = Utc::now();
        entity::teacher::ActiveModel {
            name: ActiveValue::Set(self.name),
            nip: ActiveValue::Set(self.nip),
            email: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}

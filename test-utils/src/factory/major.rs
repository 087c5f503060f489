//! Major factory for creating test major entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test majors with customizable fields.
///
/// Defaults:
/// - name: `"Major {id}"` where id is auto-incremented
/// - code: `"MJ{id}"`
/// - description: `"Test major"`
/// - facilities / career_prospects: empty lists
/// - is_active: `true`
pub struct MajorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    facilities: Vec<String>,
    career_prospects: Vec<String>,
    total_students: i32,
    is_active: bool,
}

impl<'a> MajorFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Major {}", id),
            code: format!("MJ{}", id),
            facilities: Vec::new(),
            career_prospects: Vec::new(),
            total_students: 0,
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

    pub fn facilities(mut self, facilities: Vec<String>) -> Self {
        self.facilities = facilities;
        self
    }

    pub fn career_prospects(mut self, career_prospects: Vec<String>) -> Self {
        self.career_prospects = career_prospects;
        self
    }

    pub fn total_students(mut self, total_students: i32) -> Self {
        self.total_students = total_students;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the major entity into the database.
    pub async fn build(self) -> Result<entity::major::Model, DbErr> {
        let now = Utc::now();
        entity::major::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            description: ActiveValue::Set("Test major".to_string()),
            image_url: ActiveValue::Set(None),
            facilities: ActiveValue::Set(self.facilities.into()),
            career_prospects: ActiveValue::Set(self.career_prospects.into()),
            total_students: ActiveValue::Set(self.total_students),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a major with default values.
pub async fn create_major(db: &DatabaseConnection) -> Result<entity::major::Model, DbErr> {
    MajorFactory::new(db).build().await
}

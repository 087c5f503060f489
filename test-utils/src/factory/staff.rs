//! Staff factory for creating test staff entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members with customizable fields.
///
/// Defaults:
/// - name: `"Staff {id}"` where id is auto-incremented
/// - role: `"teacher"`
/// - position: `"Teacher"`
/// - display_order: `0`
/// - is_active: `true`
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    role: String,
    position: String,
    display_order: i32,
    is_active: bool,
}

impl<'a> StaffFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Staff {}", id),
            role: "teacher".to_string(),
            position: "Teacher".to_string(),
            display_order: 0,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        let now = Utc::now();
        entity::staff::ActiveModel {
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            position: ActiveValue::Set(self.position),
            image_url: ActiveValue::Set(None),
            display_order: ActiveValue::Set(self.display_order),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff member with default values.
pub async fn create_staff(db: &DatabaseConnection) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db).build().await
}

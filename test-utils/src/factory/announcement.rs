//! Announcement factory for creating test announcement entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements with customizable fields.
///
/// Defaults:
/// - title: `"Announcement {id}"` where id is auto-incremented
/// - category: `"general"`, priority: `"normal"`
/// - is_published: `false` (and no `published_at`)
///
/// Setting `is_published(true)` also stamps `published_at`, matching what
/// the repository does on a published create.
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    priority: String,
    is_published: bool,
}

impl<'a> AnnouncementFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Announcement {}", id),
            category: "general".to_string(),
            priority: "normal".to_string(),
            is_published: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn is_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Builds and inserts the announcement entity into the database.
    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        let now = Utc::now();
        entity::announcement::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set("Test announcement content".to_string()),
            category: ActiveValue::Set(self.category),
            priority: ActiveValue::Set(self.priority),
            is_published: ActiveValue::Set(self.is_published),
            published_at: ActiveValue::Set(self.is_published.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpublished announcement with default values.
pub async fn create_announcement(
    db: &DatabaseConnection,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db).build().await
}

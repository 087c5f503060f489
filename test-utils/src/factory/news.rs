//! News factory for creating test news entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news articles with customizable fields.
///
/// Defaults:
/// - title: `"News {id}"` where id is auto-incremented
/// - category: `"information"`
/// - is_published: `false`
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    is_published: bool,
}

impl<'a> NewsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News {}", id),
            category: "information".to_string(),
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

    pub fn is_published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Builds and inserts the news entity into the database.
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        let now = Utc::now();
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set("Test news content".to_string()),
            excerpt: ActiveValue::Set("Test news excerpt".to_string()),
            category: ActiveValue::Set(self.category),
            image_url: ActiveValue::Set(None),
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

/// Creates an unpublished news article with default values.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}

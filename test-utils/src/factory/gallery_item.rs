//! Gallery item factory for creating test gallery entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gallery items with customizable fields.
///
/// Defaults:
/// - title: `"Gallery item {id}"` where id is auto-incremented
/// - category: `"activity"`
/// - is_published: `false`
pub struct GalleryItemFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    is_published: bool,
}

impl<'a> GalleryItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Gallery item {}", id),
            category: "activity".to_string(),
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

    /// Builds and inserts the gallery item entity into the database.
    pub async fn build(self) -> Result<entity::gallery_item::Model, DbErr> {
        let now = Utc::now();
        entity::gallery_item::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            image_url: ActiveValue::Set("https://example.com/test.jpg".to_string()),
            category: ActiveValue::Set(self.category),
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

/// Creates an unpublished gallery item with default values.
pub async fn create_gallery_item(
    db: &DatabaseConnection,
) -> Result<entity::gallery_item::Model, DbErr> {
    GalleryItemFactory::new(db).build().await
}

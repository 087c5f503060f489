use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GalleryItemDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateGalleryItemDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    /// One of: facility, activity, achievement.
    pub category: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateGalleryItemDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedGalleryItemsDto {
    pub items: Vec<GalleryItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAnnouncementDto {
    pub title: String,
    pub content: String,
    /// One of: general, academic, exam, event.
    pub category: String,
    /// One of: normal, important, urgent.
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAnnouncementDto {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAnnouncementsDto {
    pub announcements: Vec<AnnouncementDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_priority() -> String {
    "normal".to_string()
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MajorDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: String,
    pub image_url: Option<String>,
    pub facilities: Vec<String>,
    pub career_prospects: Vec<String>,
    pub total_students: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMajorDto {
    pub name: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub career_prospects: Vec<String>,
    #[serde(default)]
    pub total_students: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMajorDto {
    pub name: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub career_prospects: Vec<String>,
    #[serde(default)]
    pub total_students: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedMajorsDto {
    pub majors: Vec<MajorDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_true() -> bool {
    true
}

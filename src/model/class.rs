use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassDto {
    pub id: i32,
    pub name: String,
    pub major_id: i32,
    pub major_name: String,
    pub homeroom_teacher_id: Option<i32>,
    pub homeroom_teacher_name: Option<String>,
    pub grade_level: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateClassDto {
    pub name: String,
    pub major_id: i32,
    #[serde(default)]
    pub homeroom_teacher_id: Option<i32>,
    pub grade_level: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateClassDto {
    pub name: String,
    pub major_id: i32,
    #[serde(default)]
    pub homeroom_teacher_id: Option<i32>,
    pub grade_level: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedClassesDto {
    pub classes: Vec<ClassDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_true() -> bool {
    true
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub credits: i32,
    pub major_id: i32,
    /// Name of the owning major, resolved for display.
    pub major_name: String,
    pub teacher_id: Option<i32>,
    /// Name of the assigned teacher, when one is set.
    pub teacher_name: Option<String>,
    pub semester: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSubjectDto {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: i32,
    pub major_id: i32,
    #[serde(default)]
    pub teacher_id: Option<i32>,
    pub semester: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSubjectDto {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub credits: i32,
    pub major_id: i32,
    #[serde(default)]
    pub teacher_id: Option<i32>,
    pub semester: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSubjectsDto {
    pub subjects: Vec<SubjectDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_true() -> bool {
    true
}

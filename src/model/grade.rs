use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GradeDto {
    pub id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub semester: i32,
    pub score: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateGradeDto {
    pub student_id: i32,
    pub subject_id: i32,
    pub semester: i32,
    pub score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateGradeDto {
    pub student_id: i32,
    pub subject_id: i32,
    pub semester: i32,
    pub score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedGradesDto {
    pub grades: Vec<GradeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

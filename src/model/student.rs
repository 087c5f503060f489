use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub nisn: String,
    pub name: String,
    pub class_id: Option<i32>,
    pub class_name: Option<String>,
    pub major_id: i32,
    pub major_name: String,
    pub semester: i32,
    pub grade_level: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub nisn: String,
    pub name: String,
    #[serde(default)]
    pub class_id: Option<i32>,
    pub major_id: i32,
    pub semester: i32,
    pub grade_level: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub nisn: String,
    pub name: String,
    #[serde(default)]
    pub class_id: Option<i32>,
    pub major_id: i32,
    pub semester: i32,
    pub grade_level: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body of the bulk mutation endpoint.
///
/// `value` is required for `change_semester` and `set_grade_level` and
/// ignored for `promote_grade`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BulkStudentActionDto {
    pub student_ids: Vec<i32>,
    /// One of: change_semester, set_grade_level, promote_grade.
    pub action: String,
    #[serde(default)]
    pub value: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkStudentResultDto {
    /// How many of the submitted ids exist.
    pub matched: u64,
    /// How many rows were actually changed.
    pub updated: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedStudentsDto {
    pub students: Vec<StudentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_true() -> bool {
    true
}

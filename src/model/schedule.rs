use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: i32,
    pub subject_id: i32,
    pub subject_name: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub class_id: i32,
    pub class_name: String,
    /// Lowercase English weekday name ("monday" .. "sunday").
    pub day: String,
    /// Zero-padded "HH:MM"; the lesson occupies [start_time, end_time).
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub semester: i32,
    pub year: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub subject_id: i32,
    pub teacher_id: i32,
    pub class_id: i32,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub semester: i32,
    pub year: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateScheduleDto {
    pub subject_id: i32,
    pub teacher_id: i32,
    pub class_id: i32,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub semester: i32,
    pub year: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSchedulesDto {
    pub schedules: Vec<ScheduleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_true() -> bool {
    true
}

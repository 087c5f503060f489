use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StaffDto {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub position: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStaffDto {
    pub name: String,
    /// One of: headmaster, vice_headmaster_curriculum,
    /// vice_headmaster_students, teacher, administration, support.
    pub role: String,
    pub position: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStaffDto {
    pub name: String,
    pub role: String,
    pub position: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Organization chart grouped by role, ordered by `display_order`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationDto {
    pub headmaster: Option<StaffDto>,
    pub vice_headmasters: Vec<StaffDto>,
    pub teachers: Vec<StaffDto>,
    pub administration: Vec<StaffDto>,
    pub support: Vec<StaffDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedStaffDto {
    pub staff: Vec<StaffDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn default_true() -> bool {
    true
}

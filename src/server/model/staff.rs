//! Staff domain models, parameters and the organization-chart grouping.

use chrono::{DateTime, Utc};

use crate::{
    model::staff::{
        CreateStaffDto, OrganizationDto, PaginatedStaffDto, StaffDto, UpdateStaffDto,
    },
    server::error::AppError,
};

/// Staff role, stored lowercase with underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    Headmaster,
    ViceHeadmasterCurriculum,
    ViceHeadmasterStudents,
    Teacher,
    Administration,
    Support,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Headmaster => "headmaster",
            StaffRole::ViceHeadmasterCurriculum => "vice_headmaster_curriculum",
            StaffRole::ViceHeadmasterStudents => "vice_headmaster_students",
            StaffRole::Teacher => "teacher",
            StaffRole::Administration => "administration",
            StaffRole::Support => "support",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "headmaster" => Some(Self::Headmaster),
            "vice_headmaster_curriculum" => Some(Self::ViceHeadmasterCurriculum),
            "vice_headmaster_students" => Some(Self::ViceHeadmasterStudents),
            "teacher" => Some(Self::Teacher),
            "administration" => Some(Self::Administration),
            "support" => Some(Self::Support),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Staff {
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

impl Staff {
    pub fn from_entity(entity: entity::staff::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            position: entity.position,
            image_url: entity.image_url,
            display_order: entity.display_order,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> StaffDto {
        StaffDto {
            id: self.id,
            name: self.name,
            role: self.role,
            position: self.position,
            image_url: self.image_url,
            display_order: self.display_order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStaffParams {
    pub name: String,
    pub role: String,
    pub position: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

impl CreateStaffParams {
    pub fn from_dto(dto: CreateStaffDto) -> Result<Self, AppError> {
        let role = validate_fields(&dto.name, &dto.role, &dto.position)?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            role: role.as_str().to_string(),
            position: dto.position.trim().to_string(),
            image_url: dto.image_url,
            display_order: dto.display_order,
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStaffParams {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub position: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

impl UpdateStaffParams {
    pub fn from_dto(id: i32, dto: UpdateStaffDto) -> Result<Self, AppError> {
        let role = validate_fields(&dto.name, &dto.role, &dto.position)?;

        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            role: role.as_str().to_string(),
            position: dto.position.trim().to_string(),
            image_url: dto.image_url,
            display_order: dto.display_order,
            is_active: dto.is_active,
        })
    }
}

fn validate_fields(name: &str, role: &str, position: &str) -> Result<StaffRole, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if position.trim().is_empty() {
        return Err(AppError::BadRequest("position is required".to_string()));
    }

    StaffRole::parse(role)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid staff role '{}'", role)))
}

/// Staff grouped for the public organization chart.
///
/// Vice headmasters are grouped by role prefix so new vice roles land in the
/// right bucket without touching this code.
#[derive(Debug, Clone)]
pub struct Organization {
    pub headmaster: Option<Staff>,
    pub vice_headmasters: Vec<Staff>,
    pub teachers: Vec<Staff>,
    pub administration: Vec<Staff>,
    pub support: Vec<Staff>,
}

impl Organization {
    /// Groups a flat, already-sorted staff list into the chart structure.
    ///
    /// Assumes the input is ordered by `display_order`; within a group the
    /// relative order is preserved. Staff with an unrecognized role are
    /// bucketed under support rather than dropped.
    pub fn from_staff(staff: Vec<Staff>) -> Self {
        let mut organization = Self {
            headmaster: None,
            vice_headmasters: Vec::new(),
            teachers: Vec::new(),
            administration: Vec::new(),
            support: Vec::new(),
        };

        for member in staff {
            if member.role == StaffRole::Headmaster.as_str() {
                // A second active headmaster is rejected at write time; keep
                // the first if bad data sneaks in.
                if organization.headmaster.is_none() {
                    organization.headmaster = Some(member);
                }
            } else if member.role.starts_with("vice_headmaster") {
                organization.vice_headmasters.push(member);
            } else if member.role == StaffRole::Teacher.as_str() {
                organization.teachers.push(member);
            } else if member.role == StaffRole::Administration.as_str() {
                organization.administration.push(member);
            } else {
                organization.support.push(member);
            }
        }

        organization
    }

    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            headmaster: self.headmaster.map(|s| s.into_dto()),
            vice_headmasters: self
                .vice_headmasters
                .into_iter()
                .map(|s| s.into_dto())
                .collect(),
            teachers: self.teachers.into_iter().map(|s| s.into_dto()).collect(),
            administration: self
                .administration
                .into_iter()
                .map(|s| s.into_dto())
                .collect(),
            support: self.support.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedStaff {
    pub staff: Vec<Staff>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedStaff {
    pub fn into_dto(self) -> PaginatedStaffDto {
        PaginatedStaffDto {
            staff: self.staff.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::staff::StaffRepository,
    error::AppError,
    model::staff::{
        CreateStaffParams, Organization, PaginatedStaff, Staff, StaffRole, UpdateStaffParams,
    },
    service::total_pages,
};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a staff member, enforcing the single-headmaster invariant.
    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, AppError> {
        let repo = StaffRepository::new(self.db);

        self.check_headmaster_invariant(&repo, &params.role, params.is_active, None)
            .await?;

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Staff>, AppError> {
        let repo = StaffRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<PaginatedStaff, AppError> {
        let repo = StaffRepository::new(self.db);

        let (staff, total) = repo.get_paginated(page, per_page, include_inactive).await?;

        Ok(PaginatedStaff {
            staff,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Builds the public organization chart from active staff.
    pub async fn organization(&self) -> Result<Organization, AppError> {
        let repo = StaffRepository::new(self.db);

        let staff = repo.get_all_active_ordered().await?;

        Ok(Organization::from_staff(staff))
    }

    /// Updates a staff member, enforcing the single-headmaster invariant.
    /// Returns None if the staff member doesn't exist
    pub async fn update(&self, params: UpdateStaffParams) -> Result<Option<Staff>, AppError> {
        let repo = StaffRepository::new(self.db);

        self.check_headmaster_invariant(&repo, &params.role, params.is_active, Some(params.id))
            .await?;

        Ok(repo.update(params).await?)
    }

    /// Soft-deletes a staff member
    /// Returns false if the staff member doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StaffRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.deactivate(id).await?;

        Ok(true)
    }

    /// Rejects a write that would produce a second active headmaster.
    async fn check_headmaster_invariant(
        &self,
        repo: &StaffRepository<'_>,
        role: &str,
        is_active: bool,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        if role == StaffRole::Headmaster.as_str()
            && is_active
            && repo.active_headmaster_exists(exclude_id).await?
        {
            return Err(AppError::BadRequest(
                "An active headmaster already exists".to_string(),
            ));
        }

        Ok(())
    }
}

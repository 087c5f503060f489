use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::announcement::{
        Announcement, AnnouncementCategory, CreateAnnouncementParams, PaginatedAnnouncements,
        UpdateAnnouncementParams,
    },
    service::total_pages,
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAnnouncementParams) -> Result<Announcement, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Announcement>, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<String>,
        published_only: bool,
    ) -> Result<PaginatedAnnouncements, AppError> {
        let category = category
            .map(|value| {
                AnnouncementCategory::parse(&value)
                    .map(|c| c.as_str().to_string())
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid category '{}'", value)))
            })
            .transpose()?;

        let repo = AnnouncementRepository::new(self.db);

        let (announcements, total) = repo
            .get_paginated(page, per_page, category.as_deref(), published_only)
            .await?;

        Ok(PaginatedAnnouncements {
            announcements,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates an announcement
    /// Returns None if the announcement doesn't exist
    pub async fn update(
        &self,
        params: UpdateAnnouncementParams,
    ) -> Result<Option<Announcement>, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes an announcement
    /// Returns false if the announcement doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AnnouncementRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

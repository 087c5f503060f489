use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery::GalleryRepository,
    error::AppError,
    model::gallery::{
        CreateGalleryItemParams, GalleryCategory, GalleryItem, PaginatedGalleryItems,
        UpdateGalleryItemParams,
    },
    service::total_pages,
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGalleryItemParams) -> Result<GalleryItem, AppError> {
        let repo = GalleryRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GalleryItem>, AppError> {
        let repo = GalleryRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<String>,
        published_only: bool,
    ) -> Result<PaginatedGalleryItems, AppError> {
        let category = category
            .map(|value| {
                GalleryCategory::parse(&value)
                    .map(|c| c.as_str().to_string())
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid category '{}'", value)))
            })
            .transpose()?;

        let repo = GalleryRepository::new(self.db);

        let (items, total) = repo
            .get_paginated(page, per_page, category.as_deref(), published_only)
            .await?;

        Ok(PaginatedGalleryItems {
            items,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a gallery item
    /// Returns None if the item doesn't exist
    pub async fn update(
        &self,
        params: UpdateGalleryItemParams,
    ) -> Result<Option<GalleryItem>, AppError> {
        let repo = GalleryRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a gallery item
    /// Returns false if the item doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = GalleryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

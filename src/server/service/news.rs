use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::news::{CreateNewsParams, News, NewsCategory, PaginatedNews, UpdateNewsParams},
    service::total_pages,
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNewsParams) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<News>, AppError> {
        let repo = NewsRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<String>,
        published_only: bool,
    ) -> Result<PaginatedNews, AppError> {
        let category = category
            .map(|value| {
                NewsCategory::parse(&value)
                    .map(|c| c.as_str().to_string())
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid category '{}'", value)))
            })
            .transpose()?;

        let repo = NewsRepository::new(self.db);

        let (news, total) = repo
            .get_paginated(page, per_page, category.as_deref(), published_only)
            .await?;

        Ok(PaginatedNews {
            news,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a news article
    /// Returns None if the article doesn't exist
    pub async fn update(&self, params: UpdateNewsParams) -> Result<Option<News>, AppError> {
        let repo = NewsRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a news article
    /// Returns false if the article doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = NewsRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}

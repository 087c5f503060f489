use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::news::{CreateNewsParams, News, UpdateNewsParams};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNewsParams) -> Result<News, DbErr> {
        let now = Utc::now();

        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            excerpt: ActiveValue::Set(params.excerpt),
            category: ActiveValue::Set(params.category),
            image_url: ActiveValue::Set(params.image_url),
            is_published: ActiveValue::Set(params.is_published),
            published_at: ActiveValue::Set(params.is_published.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(news))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let news = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(news.map(News::from_entity))
    }

    /// Gets paginated news articles, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<&str>,
        published_only: bool,
    ) -> Result<(Vec<News>, u64), DbErr> {
        let mut query = entity::prelude::News::find();

        if let Some(category) = category {
            query = query.filter(entity::news::Column::Category.eq(category));
        }
        if published_only {
            query = query.filter(entity::news::Column::IsPublished.eq(true));
        }

        let paginator = query
            .order_by_desc(entity::news::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let news = paginator.fetch_page(page).await?;

        Ok((news.into_iter().map(News::from_entity).collect(), total))
    }

    /// Updates a news article, stamping `published_at` on first publish only.
    pub async fn update(&self, params: UpdateNewsParams) -> Result<Option<News>, DbErr> {
        let Some(news) = entity::prelude::News::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let published_at = match (params.is_published, news.published_at) {
            (true, None) => Some(Utc::now()),
            (_, existing) => existing,
        };

        let mut active_model: entity::news::ActiveModel = news.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.content = ActiveValue::Set(params.content);
        active_model.excerpt = ActiveValue::Set(params.excerpt);
        active_model.category = ActiveValue::Set(params.category);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.is_published = ActiveValue::Set(params.is_published);
        active_model.published_at = ActiveValue::Set(published_at);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(News::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

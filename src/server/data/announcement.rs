//! Announcement repository.
//!
//! Owns the publish-timestamp rule: `published_at` is stamped the first time
//! a row goes out with `is_published: true` and never overwritten afterwards,
//! so the first-publication date stays stable across edits and re-publishes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::announcement::{
    Announcement, CreateAnnouncementParams, UpdateAnnouncementParams,
};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAnnouncementParams) -> Result<Announcement, DbErr> {
        let now = Utc::now();

        let published_at = params.is_published.then_some(now);

        let announcement = entity::announcement::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            category: ActiveValue::Set(params.category),
            priority: ActiveValue::Set(params.priority),
            is_published: ActiveValue::Set(params.is_published),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(announcement))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let announcement = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(announcement.map(Announcement::from_entity))
    }

    /// Gets paginated announcements, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<&str>,
        published_only: bool,
    ) -> Result<(Vec<Announcement>, u64), DbErr> {
        let mut query = entity::prelude::Announcement::find();

        if let Some(category) = category {
            query = query.filter(entity::announcement::Column::Category.eq(category));
        }
        if published_only {
            query = query.filter(entity::announcement::Column::IsPublished.eq(true));
        }

        let paginator = query
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let announcements = paginator.fetch_page(page).await?;

        Ok((
            announcements
                .into_iter()
                .map(Announcement::from_entity)
                .collect(),
            total,
        ))
    }

    /// Updates an announcement, stamping `published_at` on first publish only.
    pub async fn update(
        &self,
        params: UpdateAnnouncementParams,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(announcement) = entity::prelude::Announcement::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let published_at = match (params.is_published, announcement.published_at) {
            (true, None) => Some(Utc::now()),
            (_, existing) => existing,
        };

        let mut active_model: entity::announcement::ActiveModel = announcement.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.content = ActiveValue::Set(params.content);
        active_model.category = ActiveValue::Set(params.category);
        active_model.priority = ActiveValue::Set(params.priority);
        active_model.is_published = ActiveValue::Set(params.is_published);
        active_model.published_at = ActiveValue::Set(published_at);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Announcement::from_entity(updated)))
    }

    /// Deletes an announcement permanently
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::gallery::{
    CreateGalleryItemParams, GalleryItem, UpdateGalleryItemParams,
};

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGalleryItemParams) -> Result<GalleryItem, DbErr> {
        let now = Utc::now();

        let item = entity::gallery_item::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            category: ActiveValue::Set(params.category),
            is_published: ActiveValue::Set(params.is_published),
            published_at: ActiveValue::Set(params.is_published.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GalleryItem::from_entity(item))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GalleryItem>, DbErr> {
        let item = entity::prelude::GalleryItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(item.map(GalleryItem::from_entity))
    }

    /// Gets paginated gallery items, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        category: Option<&str>,
        published_only: bool,
    ) -> Result<(Vec<GalleryItem>, u64), DbErr> {
        let mut query = entity::prelude::GalleryItem::find();

        if let Some(category) = category {
            query = query.filter(entity::gallery_item::Column::Category.eq(category));
        }
        if published_only {
            query = query.filter(entity::gallery_item::Column::IsPublished.eq(true));
        }

        let paginator = query
            .order_by_desc(entity::gallery_item::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;

        Ok((
            items.into_iter().map(GalleryItem::from_entity).collect(),
            total,
        ))
    }

    /// Updates a gallery item, stamping `published_at` on first publish only.
    pub async fn update(
        &self,
        params: UpdateGalleryItemParams,
    ) -> Result<Option<GalleryItem>, DbErr> {
        let Some(item) = entity::prelude::GalleryItem::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let published_at = match (params.is_published, item.published_at) {
            (true, None) => Some(Utc::now()),
            (_, existing) => existing,
        };

        let mut active_model: entity::gallery_item::ActiveModel = item.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.category = ActiveValue::Set(params.category);
        active_model.is_published = ActiveValue::Set(params.is_published);
        active_model.published_at = ActiveValue::Set(published_at);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(GalleryItem::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::GalleryItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

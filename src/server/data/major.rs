use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::major::{CreateMajorParams, Major, UpdateMajorParams};

pub struct MajorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MajorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new major and returns it as a domain model
    pub async fn create(&self, params: CreateMajorParams) -> Result<Major, DbErr> {
        let now = Utc::now();

        let major = entity::major::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            facilities: ActiveValue::Set(params.facilities.into()),
            career_prospects: ActiveValue::Set(params.career_prospects.into()),
            total_students: ActiveValue::Set(params.total_students),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Major::from_entity(major))
    }

    /// Gets a major by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Major>, DbErr> {
        let major = entity::prelude::Major::find_by_id(id).one(self.db).await?;

        Ok(major.map(Major::from_entity))
    }

    /// Gets paginated majors ordered by name.
    ///
    /// Inactive majors are excluded unless `include_inactive` is set.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<(Vec<Major>, u64), DbErr> {
        let mut query = entity::prelude::Major::find();

        if !include_inactive {
            query = query.filter(entity::major::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::major::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let majors = paginator.fetch_page(page).await?;

        Ok((majors.into_iter().map(Major::from_entity).collect(), total))
    }

    /// Updates a major, replacing every mutable field.
    ///
    /// Returns None if no major with the given ID exists.
    pub async fn update(&self, params: UpdateMajorParams) -> Result<Option<Major>, DbErr> {
        let Some(major) = entity::prelude::Major::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::major::ActiveModel = major.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.code = ActiveValue::Set(params.code);
        active_model.description = ActiveValue::Set(params.description);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.facilities = ActiveValue::Set(params.facilities.into());
        active_model.career_prospects = ActiveValue::Set(params.career_prospects.into());
        active_model.total_students = ActiveValue::Set(params.total_students);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Major::from_entity(updated)))
    }

    /// Deletes a major permanently
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Major::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Major::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Counts students referencing this major, including inactive ones.
    pub async fn count_dependent_students(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::MajorId.eq(id))
            .count(self.db)
            .await
    }

    /// Counts subjects referencing this major, including inactive ones.
    pub async fn count_dependent_subjects(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Subject::find()
            .filter(entity::subject::Column::MajorId.eq(id))
            .count(self.db)
            .await
    }

    /// Counts classes referencing this major, including inactive ones.
    pub async fn count_dependent_classes(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Class::find()
            .filter(entity::class::Column::MajorId.eq(id))
            .count(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::staff::{CreateStaffParams, Staff, StaffRole, UpdateStaffParams};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, DbErr> {
        let now = Utc::now();

        let staff = entity::staff::ActiveModel {
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role),
            position: ActiveValue::Set(params.position),
            image_url: ActiveValue::Set(params.image_url),
            display_order: ActiveValue::Set(params.display_order),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Staff::from_entity(staff))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Staff>, DbErr> {
        let staff = entity::prelude::Staff::find_by_id(id).one(self.db).await?;

        Ok(staff.map(Staff::from_entity))
    }

    /// Gets paginated staff ordered by display order, then name.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<(Vec<Staff>, u64), DbErr> {
        let mut query = entity::prelude::Staff::find();

        if !include_inactive {
            query = query.filter(entity::staff::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::staff::Column::DisplayOrder)
            .order_by_asc(entity::staff::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let staff = paginator.fetch_page(page).await?;

        Ok((staff.into_iter().map(Staff::from_entity).collect(), total))
    }

    /// Gets every active staff member ordered for the organization chart.
    pub async fn get_all_active_ordered(&self) -> Result<Vec<Staff>, DbErr> {
        let staff = entity::prelude::Staff::find()
            .filter(entity::staff::Column::IsActive.eq(true))
            .order_by_asc(entity::staff::Column::DisplayOrder)
            .order_by_asc(entity::staff::Column::Name)
            .all(self.db)
            .await?;

        Ok(staff.into_iter().map(Staff::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateStaffParams) -> Result<Option<Staff>, DbErr> {
        let Some(staff) = entity::prelude::Staff::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::staff::ActiveModel = staff.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.role = ActiveValue::Set(params.role);
        active_model.position = ActiveValue::Set(params.position);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.display_order = ActiveValue::Set(params.display_order);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Staff::from_entity(updated)))
    }

    /// Soft-deletes a staff member by clearing the active flag.
    pub async fn deactivate(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Staff::update_many()
            .filter(entity::staff::Column::Id.eq(id))
            .col_expr(
                entity::staff::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::staff::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Staff::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether an active headmaster other than `exclude_id` exists.
    ///
    /// Backs the write-time invariant that at most one active staff row may
    /// carry the headmaster role.
    pub async fn active_headmaster_exists(&self, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Staff::find()
            .filter(entity::staff::Column::Role.eq(StaffRole::Headmaster.as_str()))
            .filter(entity::staff::Column::IsActive.eq(true));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::staff::Column::Id.ne(exclude_id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }
}

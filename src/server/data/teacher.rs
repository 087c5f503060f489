use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::teacher::{CreateTeacherParams, Teacher, UpdateTeacherParams};

pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeacherParams) -> Result<Teacher, DbErr> {
        let now = Utc::now();

        let teacher = entity::teacher::ActiveModel {
            name: ActiveValue::Set(params.name),
            nip: ActiveValue::Set(params.nip),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            image_url: ActiveValue::Set(params.image_url),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Teacher::from_entity(teacher))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let teacher = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        Ok(teacher.map(Teacher::from_entity))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        include_inactive: bool,
    ) -> Result<(Vec<Teacher>, u64), DbErr> {
        let mut query = entity::prelude::Teacher::find();

        if !include_inactive {
            query = query.filter(entity::teacher::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::teacher::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let teachers = paginator.fetch_page(page).await?;

        Ok((
            teachers.into_iter().map(Teacher::from_entity).collect(),
            total,
        ))
    }

    pub async fn update(&self, params: UpdateTeacherParams) -> Result<Option<Teacher>, DbErr> {
        let Some(teacher) = entity::prelude::Teacher::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::teacher::ActiveModel = teacher.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.nip = ActiveValue::Set(params.nip);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.image_url = ActiveValue::Set(params.image_url);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Teacher::from_entity(updated)))
    }

    /// Soft-deletes a teacher by clearing the active flag.
    ///
    /// Old subjects, classes and schedules keep referencing the row.
    pub async fn deactivate(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Teacher::update_many()
            .filter(entity::teacher::Column::Id.eq(id))
            .col_expr(
                entity::teacher::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::teacher::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Teacher::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_dependent_subjects(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Subject::find()
            .filter(entity::subject::Column::TeacherId.eq(id))
            .count(self.db)
            .await
    }

    pub async fn count_dependent_homerooms(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Class::find()
            .filter(entity::class::Column::HomeroomTeacherId.eq(id))
            .count(self.db)
            .await
    }

    pub async fn count_dependent_schedules(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::TeacherId.eq(id))
            .count(self.db)
            .await
    }
}

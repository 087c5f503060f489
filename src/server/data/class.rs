use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::class::{Class, CreateClassParams, UpdateClassParams};

pub struct ClassRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateClassParams) -> Result<Class, DbErr> {
        let now = Utc::now();

        let class = entity::class::ActiveModel {
            name: ActiveValue::Set(params.name),
            major_id: ActiveValue::Set(params.major_id),
            homeroom_teacher_id: ActiveValue::Set(params.homeroom_teacher_id),
            grade_level: ActiveValue::Set(params.grade_level),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.enrich(class).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Class>, DbErr> {
        let Some(class) = entity::prelude::Class::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.enrich(class).await?))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        major_id: Option<i32>,
        grade_level: Option<i32>,
        include_inactive: bool,
    ) -> Result<(Vec<Class>, u64), DbErr> {
        let mut query = entity::prelude::Class::find();

        if let Some(major_id) = major_id {
            query = query.filter(entity::class::Column::MajorId.eq(major_id));
        }
        if let Some(grade_level) = grade_level {
            query = query.filter(entity::class::Column::GradeLevel.eq(grade_level));
        }
        if !include_inactive {
            query = query.filter(entity::class::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::class::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let classes = paginator.fetch_page(page).await?;

        let major_ids: Vec<i32> = classes.iter().map(|c| c.major_id).collect();
        let teacher_ids: Vec<i32> = classes.iter().filter_map(|c| c.homeroom_teacher_id).collect();

        let majors_map: HashMap<i32, entity::major::Model> = if major_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Major::find()
                .filter(entity::major::Column::Id.is_in(major_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| (m.id, m))
                .collect()
        };

        let teachers_map: HashMap<i32, entity::teacher::Model> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Teacher::find()
                .filter(entity::teacher::Column::Id.is_in(teacher_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        let classes = classes
            .into_iter()
            .map(|class| {
                let major = majors_map.get(&class.major_id).cloned();
                let teacher = class
                    .homeroom_teacher_id
                    .and_then(|id| teachers_map.get(&id).cloned());
                Class::from_related(class, major, teacher)
            })
            .collect();

        Ok((classes, total))
    }

    pub async fn update(&self, params: UpdateClassParams) -> Result<Option<Class>, DbErr> {
        let Some(class) = entity::prelude::Class::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::class::ActiveModel = class.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.major_id = ActiveValue::Set(params.major_id);
        active_model.homeroom_teacher_id = ActiveValue::Set(params.homeroom_teacher_id);
        active_model.grade_level = ActiveValue::Set(params.grade_level);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(self.enrich(updated).await?))
    }

    /// Soft-deletes a class by clearing the active flag.
    pub async fn deactivate(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Class::update_many()
            .filter(entity::class::Column::Id.eq(id))
            .col_expr(
                entity::class::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::class::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Class::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn count_dependent_students(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::ClassId.eq(id))
            .count(self.db)
            .await
    }

    pub async fn count_dependent_schedules(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::ClassId.eq(id))
            .count(self.db)
            .await
    }

    async fn enrich(&self, class: entity::class::Model) -> Result<Class, DbErr> {
        let major = entity::prelude::Major::find_by_id(class.major_id)
            .one(self.db)
            .await?;

        let teacher = match class.homeroom_teacher_id {
            Some(teacher_id) => {
                entity::prelude::Teacher::find_by_id(teacher_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Class::from_related(class, major, teacher))
    }
}

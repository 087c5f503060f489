use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::subject::{CreateSubjectParams, Subject, UpdateSubjectParams};

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new subject and returns it enriched with related names
    pub async fn create(&self, params: CreateSubjectParams) -> Result<Subject, DbErr> {
        let now = Utc::now();

        let subject = entity::subject::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            description: ActiveValue::Set(params.description),
            credits: ActiveValue::Set(params.credits),
            major_id: ActiveValue::Set(params.major_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            semester: ActiveValue::Set(params.semester),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.enrich(subject).await
    }

    /// Gets a subject by ID with related major and teacher names
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Subject>, DbErr> {
        let Some(subject) = entity::prelude::Subject::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.enrich(subject).await?))
    }

    /// Gets paginated subjects with optional major and semester filters.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        major_id: Option<i32>,
        semester: Option<i32>,
        include_inactive: bool,
    ) -> Result<(Vec<Subject>, u64), DbErr> {
        let mut query = entity::prelude::Subject::find();

        if let Some(major_id) = major_id {
            query = query.filter(entity::subject::Column::MajorId.eq(major_id));
        }
        if let Some(semester) = semester {
            query = query.filter(entity::subject::Column::Semester.eq(semester));
        }
        if !include_inactive {
            query = query.filter(entity::subject::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::subject::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let subjects = paginator.fetch_page(page).await?;

        // Resolve related names in one query per relation instead of per row
        let major_ids: Vec<i32> = subjects.iter().map(|s| s.major_id).collect();
        let teacher_ids: Vec<i32> = subjects.iter().filter_map(|s| s.teacher_id).collect();

        let majors_map = load_majors(self.db, major_ids).await?;
        let teachers_map = load_teachers(self.db, teacher_ids).await?;

        let subjects = subjects
            .into_iter()
            .map(|subject| {
                let major = majors_map.get(&subject.major_id).cloned();
                let teacher = subject
                    .teacher_id
                    .and_then(|id| teachers_map.get(&id).cloned());
                Subject::from_related(subject, major, teacher)
            })
            .collect();

        Ok((subjects, total))
    }

    /// Updates a subject, replacing every mutable field.
    ///
    /// Returns None if no subject with the given ID exists.
    pub async fn update(&self, params: UpdateSubjectParams) -> Result<Option<Subject>, DbErr> {
        let Some(subject) = entity::prelude::Subject::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::subject::ActiveModel = subject.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.code = ActiveValue::Set(params.code);
        active_model.description = ActiveValue::Set(params.description);
        active_model.credits = ActiveValue::Set(params.credits);
        active_model.major_id = ActiveValue::Set(params.major_id);
        active_model.teacher_id = ActiveValue::Set(params.teacher_id);
        active_model.semester = ActiveValue::Set(params.semester);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(self.enrich(updated).await?))
    }

    /// Soft-deletes a subject by clearing the active flag.
    pub async fn deactivate(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Subject::update_many()
            .filter(entity::subject::Column::Id.eq(id))
            .col_expr(
                entity::subject::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                entity::subject::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Subject::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_dependent_grades(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Grade::find()
            .filter(entity::grade::Column::SubjectId.eq(id))
            .count(self.db)
            .await
    }

    pub async fn count_dependent_schedules(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::SubjectId.eq(id))
            .count(self.db)
            .await
    }

    async fn enrich(&self, subject: entity::subject::Model) -> Result<Subject, DbErr> {
        let major = entity::prelude::Major::find_by_id(subject.major_id)
            .one(self.db)
            .await?;

        let teacher = match subject.teacher_id {
            Some(teacher_id) => {
                entity::prelude::Teacher::find_by_id(teacher_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Subject::from_related(subject, major, teacher))
    }
}

async fn load_majors(
    db: &DatabaseConnection,
    ids: Vec<i32>,
) -> Result<HashMap<i32, entity::major::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::Major::find()
        .filter(entity::major::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect())
}

async fn load_teachers(
    db: &DatabaseConnection,
    ids: Vec<i32>,
) -> Result<HashMap<i32, entity::teacher::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::Teacher::find()
        .filter(entity::teacher::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect())
}

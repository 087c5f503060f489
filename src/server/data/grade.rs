use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::grade::{CreateGradeParams, Grade, UpdateGradeParams};

pub struct GradeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGradeParams) -> Result<Grade, DbErr> {
        let now = Utc::now();

        let grade = entity::grade::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            subject_id: ActiveValue::Set(params.subject_id),
            semester: ActiveValue::Set(params.semester),
            score: ActiveValue::Set(params.score),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.enrich(grade).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Grade>, DbErr> {
        let Some(grade) = entity::prelude::Grade::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.enrich(grade).await?))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        student_id: Option<i32>,
        subject_id: Option<i32>,
        semester: Option<i32>,
    ) -> Result<(Vec<Grade>, u64), DbErr> {
        let mut query = entity::prelude::Grade::find();

        if let Some(student_id) = student_id {
            query = query.filter(entity::grade::Column::StudentId.eq(student_id));
        }
        if let Some(subject_id) = subject_id {
            query = query.filter(entity::grade::Column::SubjectId.eq(subject_id));
        }
        if let Some(semester) = semester {
            query = query.filter(entity::grade::Column::Semester.eq(semester));
        }

        let paginator = query
            .order_by_desc(entity::grade::Column::UpdatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let grades = paginator.fetch_page(page).await?;

        let student_ids: Vec<i32> = grades.iter().map(|g| g.student_id).collect();
        let subject_ids: Vec<i32> = grades.iter().map(|g| g.subject_id).collect();

        let students_map: HashMap<i32, entity::student::Model> = if student_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Student::find()
                .filter(entity::student::Column::Id.is_in(student_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        };

        let subjects_map: HashMap<i32, entity::subject::Model> = if subject_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Subject::find()
                .filter(entity::subject::Column::Id.is_in(subject_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        };

        let grades = grades
            .into_iter()
            .map(|grade| {
                let student = students_map.get(&grade.student_id).cloned();
                let subject = subjects_map.get(&grade.subject_id).cloned();
                Grade::from_related(grade, student, subject)
            })
            .collect();

        Ok((grades, total))
    }

    pub async fn update(&self, params: UpdateGradeParams) -> Result<Option<Grade>, DbErr> {
        let Some(grade) = entity::prelude::Grade::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::grade::ActiveModel = grade.into();
        active_model.student_id = ActiveValue::Set(params.student_id);
        active_model.subject_id = ActiveValue::Set(params.subject_id);
        active_model.semester = ActiveValue::Set(params.semester);
        active_model.score = ActiveValue::Set(params.score);
        active_model.notes = ActiveValue::Set(params.notes);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(self.enrich(updated).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Grade::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn enrich(&self, grade: entity::grade::Model) -> Result<Grade, DbErr> {
        let student = entity::prelude::Student::find_by_id(grade.student_id)
            .one(self.db)
            .await?;
        let subject = entity::prelude::Subject::find_by_id(grade.subject_id)
            .one(self.db)
            .await?;

        Ok(Grade::from_related(grade, student, subject))
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::student::{CreateStudentParams, Student, UpdateStudentParams};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let now = Utc::now();

        let student = entity::student::ActiveModel {
            nisn: ActiveValue::Set(params.nisn),
            name: ActiveValue::Set(params.name),
            class_id: ActiveValue::Set(params.class_id),
            major_id: ActiveValue::Set(params.major_id),
            semester: ActiveValue::Set(params.semester),
            grade_level: ActiveValue::Set(params.grade_level),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.enrich(student).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.enrich(student).await?))
    }

    /// Gets paginated students with optional filters.
    ///
    /// `search` matches a substring of the name or the exact NISN.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        class_id: Option<i32>,
        major_id: Option<i32>,
        grade_level: Option<i32>,
        search: Option<&str>,
        include_inactive: bool,
    ) -> Result<(Vec<Student>, u64), DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(class_id) = class_id {
            query = query.filter(entity::student::Column::ClassId.eq(class_id));
        }
        if let Some(major_id) = major_id {
            query = query.filter(entity::student::Column::MajorId.eq(major_id));
        }
        if let Some(grade_level) = grade_level {
            query = query.filter(entity::student::Column::GradeLevel.eq(grade_level));
        }
        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::student::Column::Name.contains(search))
                    .add(entity::student::Column::Nisn.eq(search)),
            );
        }
        if !include_inactive {
            query = query.filter(entity::student::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::student::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let students = paginator.fetch_page(page).await?;

        let class_ids: Vec<i32> = students.iter().filter_map(|s| s.class_id).collect();
        let major_ids: Vec<i32> = students.iter().map(|s| s.major_id).collect();

        let classes_map: HashMap<i32, entity::class::Model> = if class_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Class::find()
                .filter(entity::class::Column::Id.is_in(class_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

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

        let students = students
            .into_iter()
            .map(|student| {
                let class = student.class_id.and_then(|id| classes_map.get(&id).cloned());
                let major = majors_map.get(&student.major_id).cloned();
                Student::from_related(student, class, major)
            })
            .collect();

        Ok((students, total))
    }

    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, DbErr> {
        let Some(student) = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student::ActiveModel = student.into();
        active_model.nisn = ActiveValue::Set(params.nisn);
        active_model.name = ActiveValue::Set(params.name);
        active_model.class_id = ActiveValue::Set(params.class_id);
        active_model.major_id = ActiveValue::Set(params.major_id);
        active_model.semester = ActiveValue::Set(params.semester);
        active_model.grade_level = ActiveValue::Set(params.grade_level);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(self.enrich(updated).await?))
    }

    /// Deletes a student permanently
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_dependent_grades(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(id))
            .count(self.db)
            .await
    }

    /// Counts how many of the given ids exist.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Id.is_in(ids.to_vec()))
            .count(self.db)
            .await
    }

    /// Sets the semester for every matching student in one statement.
    pub async fn set_semester(&self, ids: &[i32], semester: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::update_many()
            .filter(entity::student::Column::Id.is_in(ids.to_vec()))
            .col_expr(entity::student::Column::Semester, Expr::value(semester))
            .col_expr(entity::student::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the grade level for every matching student in one statement.
    pub async fn set_grade_level(&self, ids: &[i32], grade_level: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::update_many()
            .filter(entity::student::Column::Id.is_in(ids.to_vec()))
            .col_expr(
                entity::student::Column::GradeLevel,
                Expr::value(grade_level),
            )
            .col_expr(entity::student::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Increments the grade level for every matching student below the cap.
    ///
    /// Students already at `max_grade_level` are left untouched, which is why
    /// the returned row count can be lower than the number of matched ids.
    pub async fn promote_grade(&self, ids: &[i32], max_grade_level: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Student::update_many()
            .filter(entity::student::Column::Id.is_in(ids.to_vec()))
            .filter(entity::student::Column::GradeLevel.lt(max_grade_level))
            .col_expr(
                entity::student::Column::GradeLevel,
                Expr::col(entity::student::Column::GradeLevel).add(1),
            )
            .col_expr(entity::student::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn enrich(&self, student: entity::student::Model) -> Result<Student, DbErr> {
        let class = match student.class_id {
            Some(class_id) => {
                entity::prelude::Class::find_by_id(class_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        let major = entity::prelude::Major::find_by_id(student.major_id)
            .one(self.db)
            .await?;

        Ok(Student::from_related(student, class, major))
    }
}

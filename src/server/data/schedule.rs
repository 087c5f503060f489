//! Lesson schedule repository.
//!
//! Unlike the other repositories this one is generic over the connection so
//! the service layer can run the conflict scan and the subsequent write on a
//! single transaction. Two concurrent writers then cannot both pass the scan
//! and both insert overlapping rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::schedule::{CreateScheduleParams, Schedule, UpdateScheduleParams};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Finds active schedules for the same class and day whose time range
    /// overlaps the candidate `[start_time, end_time)`.
    ///
    /// Three overlap cases are checked, all on half-open semantics:
    /// 1. the candidate start falls inside an existing range,
    /// 2. the candidate end falls inside an existing range,
    /// 3. an existing range lies fully inside the candidate.
    ///
    /// Times are zero-padded "HH:MM" strings, so the string comparisons the
    /// database performs are chronological comparisons. `exclude_id` skips
    /// the row being updated so a schedule never conflicts with itself.
    /// Results carry the related subject for conflict messages.
    pub async fn find_conflicts(
        &self,
        class_id: i32,
        day: &str,
        start_time: &str,
        end_time: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<(entity::schedule::Model, Option<entity::subject::Model>)>, DbErr> {
        let overlap = Condition::any()
            .add(
                Condition::all()
                    .add(entity::schedule::Column::StartTime.lte(start_time))
                    .add(entity::schedule::Column::EndTime.gt(start_time)),
            )
            .add(
                Condition::all()
                    .add(entity::schedule::Column::StartTime.lt(end_time))
                    .add(entity::schedule::Column::EndTime.gte(end_time)),
            )
            .add(
                Condition::all()
                    .add(entity::schedule::Column::StartTime.gte(start_time))
                    .add(entity::schedule::Column::EndTime.lte(end_time)),
            );

        let mut query = entity::prelude::Schedule::find()
            .find_also_related(entity::prelude::Subject)
            .filter(entity::schedule::Column::ClassId.eq(class_id))
            .filter(entity::schedule::Column::Day.eq(day))
            .filter(entity::schedule::Column::IsActive.eq(true))
            .filter(overlap);

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::schedule::Column::Id.ne(exclude_id));
        }

        query
            .order_by_asc(entity::schedule::Column::StartTime)
            .all(self.conn)
            .await
    }

    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, DbErr> {
        let now = Utc::now();

        let schedule = entity::schedule::ActiveModel {
            subject_id: ActiveValue::Set(params.subject_id),
            teacher_id: ActiveValue::Set(params.teacher_id),
            class_id: ActiveValue::Set(params.class_id),
            day: ActiveValue::Set(params.day),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            room: ActiveValue::Set(params.room),
            semester: ActiveValue::Set(params.semester),
            year: ActiveValue::Set(params.year),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        self.enrich(schedule).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let Some(schedule) = entity::prelude::Schedule::find_by_id(id).one(self.conn).await?
        else {
            return Ok(None);
        };

        Ok(Some(self.enrich(schedule).await?))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        class_id: Option<i32>,
        teacher_id: Option<i32>,
        day: Option<&str>,
        include_inactive: bool,
    ) -> Result<(Vec<Schedule>, u64), DbErr> {
        let mut query = entity::prelude::Schedule::find();

        if let Some(class_id) = class_id {
            query = query.filter(entity::schedule::Column::ClassId.eq(class_id));
        }
        if let Some(teacher_id) = teacher_id {
            query = query.filter(entity::schedule::Column::TeacherId.eq(teacher_id));
        }
        if let Some(day) = day {
            query = query.filter(entity::schedule::Column::Day.eq(day));
        }
        if !include_inactive {
            query = query.filter(entity::schedule::Column::IsActive.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::schedule::Column::Day)
            .order_by_asc(entity::schedule::Column::StartTime)
            .paginate(self.conn, per_page);

        let total = paginator.num_items().await?;
        let schedules = paginator.fetch_page(page).await?;

        // Resolve display names in one query per relation
        let subject_ids: Vec<i32> = schedules.iter().map(|s| s.subject_id).collect();
        let teacher_ids: Vec<i32> = schedules.iter().map(|s| s.teacher_id).collect();
        let class_ids: Vec<i32> = schedules.iter().map(|s| s.class_id).collect();

        let subjects_map: HashMap<i32, entity::subject::Model> = if subject_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Subject::find()
                .filter(entity::subject::Column::Id.is_in(subject_ids))
                .all(self.conn)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        };

        let teachers_map: HashMap<i32, entity::teacher::Model> = if teacher_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Teacher::find()
                .filter(entity::teacher::Column::Id.is_in(teacher_ids))
                .all(self.conn)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        let classes_map: HashMap<i32, entity::class::Model> = if class_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Class::find()
                .filter(entity::class::Column::Id.is_in(class_ids))
                .all(self.conn)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let schedules = schedules
            .into_iter()
            .map(|schedule| {
                let subject = subjects_map.get(&schedule.subject_id).cloned();
                let teacher = teachers_map.get(&schedule.teacher_id).cloned();
                let class = classes_map.get(&schedule.class_id).cloned();
                Schedule::from_related(schedule, subject, teacher, class)
            })
            .collect();

        Ok((schedules, total))
    }

    pub async fn update(&self, params: UpdateScheduleParams) -> Result<Option<Schedule>, DbErr> {
        let Some(schedule) = entity::prelude::Schedule::find_by_id(params.id)
            .one(self.conn)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::schedule::ActiveModel = schedule.into();
        active_model.subject_id = ActiveValue::Set(params.subject_id);
        active_model.teacher_id = ActiveValue::Set(params.teacher_id);
        active_model.class_id = ActiveValue::Set(params.class_id);
        active_model.day = ActiveValue::Set(params.day);
        active_model.start_time = ActiveValue::Set(params.start_time);
        active_model.end_time = ActiveValue::Set(params.end_time);
        active_model.room = ActiveValue::Set(params.room);
        active_model.semester = ActiveValue::Set(params.semester);
        active_model.year = ActiveValue::Set(params.year);
        active_model.is_active = ActiveValue::Set(params.is_active);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.conn).await?;

        Ok(Some(self.enrich(updated).await?))
    }

    /// Deletes a schedule permanently
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Schedule::delete_by_id(id)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Schedule::find_by_id(id)
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }

    async fn enrich(&self, schedule: entity::schedule::Model) -> Result<Schedule, DbErr> {
        let subject = entity::prelude::Subject::find_by_id(schedule.subject_id)
            .one(self.conn)
            .await?;
        let teacher = entity::prelude::Teacher::find_by_id(schedule.teacher_id)
            .one(self.conn)
            .await?;
        let class = entity::prelude::Class::find_by_id(schedule.class_id)
            .one(self.conn)
            .await?;

        Ok(Schedule::from_related(schedule, subject, teacher, class))
    }
}

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        class::ClassRepository, schedule::ScheduleRepository, subject::SubjectRepository,
        teacher::TeacherRepository,
    },
    error::AppError,
    model::schedule::{
        CreateScheduleParams, PaginatedSchedules, Schedule, UpdateScheduleParams, Weekday,
    },
    service::total_pages,
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a schedule, rejecting overlaps with existing active lessons.
    ///
    /// The conflict scan and the insert run on one transaction so a
    /// concurrent writer cannot slip an overlapping row between the two.
    /// Inactive schedules skip the scan; they never clash with anything.
    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, AppError> {
        self.check_references(params.subject_id, params.teacher_id, params.class_id)
            .await?;

        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);

        if params.is_active {
            let conflicts = repo
                .find_conflicts(
                    params.class_id,
                    &params.day,
                    &params.start_time,
                    &params.end_time,
                    None,
                )
                .await?;

            if let Some((existing, subject)) = conflicts.first() {
                let message = conflict_message(existing, subject.as_ref());
                txn.rollback().await?;
                return Err(AppError::BadRequest(message));
            }
        }

        let schedule = repo.create(params).await?;

        txn.commit().await?;

        Ok(schedule)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Schedule>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        class_id: Option<i32>,
        teacher_id: Option<i32>,
        day: Option<String>,
        include_inactive: bool,
    ) -> Result<PaginatedSchedules, AppError> {
        // Canonicalize the day filter so "Monday" matches stored "monday"
        let day = day
            .map(|value| {
                Weekday::parse(&value)
                    .map(|day| day.as_str().to_string())
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid day '{}'", value)))
            })
            .transpose()?;

        let repo = ScheduleRepository::new(self.db);

        let (schedules, total) = repo
            .get_paginated(
                page,
                per_page,
                class_id,
                teacher_id,
                day.as_deref(),
                include_inactive,
            )
            .await?;

        Ok(PaginatedSchedules {
            schedules,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a schedule, rejecting overlaps with other active lessons.
    ///
    /// The row being updated is excluded from the scan so a schedule never
    /// conflicts with itself. Returns None if the schedule doesn't exist.
    pub async fn update(&self, params: UpdateScheduleParams) -> Result<Option<Schedule>, AppError> {
        self.check_references(params.subject_id, params.teacher_id, params.class_id)
            .await?;

        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);

        if !repo.exists(params.id).await? {
            txn.rollback().await?;
            return Ok(None);
        }

        if params.is_active {
            let conflicts = repo
                .find_conflicts(
                    params.class_id,
                    &params.day,
                    &params.start_time,
                    &params.end_time,
                    Some(params.id),
                )
                .await?;

            if let Some((existing, subject)) = conflicts.first() {
                let message = conflict_message(existing, subject.as_ref());
                txn.rollback().await?;
                return Err(AppError::BadRequest(message));
            }
        }

        let schedule = repo.update(params).await?;

        txn.commit().await?;

        Ok(schedule)
    }

    /// Deletes a schedule
    /// Returns false if the schedule doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ScheduleRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn check_references(
        &self,
        subject_id: i32,
        teacher_id: i32,
        class_id: i32,
    ) -> Result<(), AppError> {
        if !SubjectRepository::new(self.db).exists(subject_id).await? {
            return Err(AppError::BadRequest(format!(
                "subject_id {} does not reference an existing subject",
                subject_id
            )));
        }
        if !TeacherRepository::new(self.db).exists(teacher_id).await? {
            return Err(AppError::BadRequest(format!(
                "teacher_id {} does not reference an existing teacher",
                teacher_id
            )));
        }
        if !ClassRepository::new(self.db).exists(class_id).await? {
            return Err(AppError::BadRequest(format!(
                "class_id {} does not reference an existing class",
                class_id
            )));
        }

        Ok(())
    }
}

fn conflict_message(
    existing: &entity::schedule::Model,
    subject: Option<&entity::subject::Model>,
) -> String {
    let subject_name = subject.map(|s| s.name.as_str()).unwrap_or("another lesson");

    format!(
        "Schedule conflicts with {} from {} to {} in this class",
        subject_name, existing.start_time, existing.end_time
    )
}

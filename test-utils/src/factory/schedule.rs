//! Schedule factory for creating test schedule entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schedules with customizable fields.
///
/// Defaults:
/// - day: `"monday"`
/// - start_time / end_time: `"07:00"` / `"08:00"`
/// - room: `"R101"`
/// - semester: `1`
/// - year: `"2025/2026"`
/// - is_active: `true`
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    subject_id: i32,
    teacher_id: i32,
    class_id: i32,
    day: String,
    start_time: String,
    end_time: String,
    room: String,
    semester: i32,
    year: String,
    is_active: bool,
}

impl<'a> ScheduleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, subject_id: i32, teacher_id: i32, class_id: i32) -> Self {
        Self {
            db,
            subject_id,
            teacher_id,
            class_id,
            day: "monday".to_string(),
            start_time: "07:00".to_string(),
            end_time: "08:00".to_string(),
            room: "R101".to_string(),
            semester: 1,
            year: "2025/2026".to_string(),
            is_active: true,
        }
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = end_time.into();
        self
    }

    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the schedule entity into the database.
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();
        entity::schedule::ActiveModel {
            subject_id: ActiveValue::Set(self.subject_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            class_id: ActiveValue::Set(self.class_id),
            day: ActiveValue::Set(self.day),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            room: ActiveValue::Set(self.room),
            semester: ActiveValue::Set(self.semester),
            year: ActiveValue::Set(self.year),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a schedule for the given subject, teacher and class with defaults.
pub async fn create_schedule(
    db: &DatabaseConnection,
    subject_id: i32,
    teacher_id: i32,
    class_id: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, subject_id, teacher_id, class_id)
        .build()
        .await
}

//! Lesson schedule domain models, parameters and the weekday type.

use chrono::{DateTime, Utc};

use crate::{
    model::schedule::{
        CreateScheduleDto, PaginatedSchedulesDto, ScheduleDto, UpdateScheduleDto,
    },
    server::{
        error::AppError,
        model::{SEMESTER_MAX, SEMESTER_MIN},
        util::parse::parse_time_hhmm,
    },
};

/// Day of the week a lesson occurs on, stored lowercase in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Case-insensitive parse of an English weekday name.
    pub fn parse(value: &str) -> Option<Weekday> {
        match value.to_ascii_lowercase().as_str() {
            "monday" => Some(Weekday::Monday),
            "tuesday" => Some(Weekday::Tuesday),
            "wednesday" => Some(Weekday::Wednesday),
            "thursday" => Some(Weekday::Thursday),
            "friday" => Some(Weekday::Friday),
            "saturday" => Some(Weekday::Saturday),
            "sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub id: i32,
    pub subject_id: i32,
    pub subject_name: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub class_id: i32,
    pub class_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub semester: i32,
    pub year: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Converts entity models to a domain model, enriching with display names
    /// of the subject, teacher and class.
    pub fn from_related(
        entity: entity::schedule::Model,
        subject: Option<entity::subject::Model>,
        teacher: Option<entity::teacher::Model>,
        class: Option<entity::class::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            subject_id: entity.subject_id,
            subject_name: subject
                .map(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            teacher_id: entity.teacher_id,
            teacher_name: teacher
                .map(|t| t.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            class_id: entity.class_id,
            class_name: class
                .map(|c| c.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            day: entity.day,
            start_time: entity.start_time,
            end_time: entity.end_time,
            room: entity.room,
            semester: entity.semester,
            year: entity.year,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            subject_id: self.subject_id,
            subject_name: self.subject_name,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            class_id: self.class_id,
            class_name: self.class_name,
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            room: self.room,
            semester: self.semester,
            year: self.year,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub subject_id: i32,
    pub teacher_id: i32,
    pub class_id: i32,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub semester: i32,
    pub year: String,
    pub is_active: bool,
}

impl CreateScheduleParams {
    pub fn from_dto(dto: CreateScheduleDto) -> Result<Self, AppError> {
        let (day, start_time, end_time) =
            validate_slot(&dto.day, &dto.start_time, &dto.end_time)?;
        validate_fields(&dto.room, dto.semester, &dto.year)?;

        Ok(Self {
            subject_id: dto.subject_id,
            teacher_id: dto.teacher_id,
            class_id: dto.class_id,
            day,
            start_time,
            end_time,
            room: dto.room.trim().to_string(),
            semester: dto.semester,
            year: dto.year.trim().to_string(),
            is_active: dto.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateScheduleParams {
    pub id: i32,
    pub subject_id: i32,
    pub teacher_id: i32,
    pub class_id: i32,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub semester: i32,
    pub year: String,
    pub is_active: bool,
}

impl UpdateScheduleParams {
    pub fn from_dto(id: i32, dto: UpdateScheduleDto) -> Result<Self, AppError> {
        let (day, start_time, end_time) =
            validate_slot(&dto.day, &dto.start_time, &dto.end_time)?;
        validate_fields(&dto.room, dto.semester, &dto.year)?;

        Ok(Self {
            id,
            subject_id: dto.subject_id,
            teacher_id: dto.teacher_id,
            class_id: dto.class_id,
            day,
            start_time,
            end_time,
            room: dto.room.trim().to_string(),
            semester: dto.semester,
            year: dto.year.trim().to_string(),
            is_active: dto.is_active,
        })
    }
}

/// Validates the day and time range, returning canonical stored forms.
///
/// The range is half-open, so `end_time` must be strictly after `start_time`;
/// a zero-length lesson is rejected.
fn validate_slot(
    day: &str,
    start_time: &str,
    end_time: &str,
) -> Result<(String, String, String), AppError> {
    let day = Weekday::parse(day)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid day '{}'", day)))?;

    let start_time = parse_time_hhmm(start_time)?;
    let end_time = parse_time_hhmm(end_time)?;

    if end_time <= start_time {
        return Err(AppError::BadRequest(
            "end_time must be after start_time".to_string(),
        ));
    }

    Ok((day.as_str().to_string(), start_time, end_time))
}

fn validate_fields(room: &str, semester: i32, year: &str) -> Result<(), AppError> {
    if room.trim().is_empty() {
        return Err(AppError::BadRequest("room is required".to_string()));
    }
    if !(SEMESTER_MIN..=SEMESTER_MAX).contains(&semester) {
        return Err(AppError::BadRequest(format!(
            "semester must be between {} and {}",
            SEMESTER_MIN, SEMESTER_MAX
        )));
    }
    if year.trim().is_empty() {
        return Err(AppError::BadRequest("year is required".to_string()));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct PaginatedSchedules {
    pub schedules: Vec<Schedule>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSchedules {
    pub fn into_dto(self) -> PaginatedSchedulesDto {
        PaginatedSchedulesDto {
            schedules: self.schedules.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::{CreateScheduleParams, UpdateScheduleParams},
};

mod create;
mod find_conflicts;
mod get_paginated;
mod update;

/// Builds create parameters for a monday lesson in the given slot.
fn lesson(
    subject_id: i32,
    teacher_id: i32,
    class_id: i32,
    start_time: &str,
    end_time: &str,
) -> CreateScheduleParams {
    CreateScheduleParams {
        subject_id,
        teacher_id,
        class_id,
        day: "monday".to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        room: "R101".to_string(),
        semester: 1,
        year: "2025/2026".to_string(),
        is_active: true,
    }
}

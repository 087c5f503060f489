//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate request input in `from_dto` before anything touches the
//! database.

pub mod announcement;
pub mod class;
pub mod gallery;
pub mod grade;
pub mod major;
pub mod news;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

/// Valid semester range shared by subjects, students and grades.
pub const SEMESTER_MIN: i32 = 1;
pub const SEMESTER_MAX: i32 = 8;

/// Valid grade-level range; `promote_grade` clamps at the maximum.
pub const GRADE_LEVEL_MIN: i32 = 10;
pub const GRADE_LEVEL_MAX: i32 = 12;

//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// code or identification number to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete academic roster with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Major
/// 2. Teacher
/// 3. Class (in the major, homeroomed by the teacher)
/// 4. Subject (in the major, taught by the teacher)
/// 5. Student (in the major and class)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((major, teacher, class, subject, student))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_roster(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::major::Model,
        entity::teacher::Model,
        entity::class::Model,
        entity::subject::Model,
        entity::student::Model,
    ),
    DbErr,
> {
    let major = crate::factory::major::create_major(db).await?;
    let teacher = crate::factory::teacher::create_teacher(db).await?;
    let class = crate::factory::class::ClassFactory::new(db, major.id)
        .homeroom_teacher_id(Some(teacher.id))
        .build()
        .await?;
    let subject = crate::factory::subject::SubjectFactory::new(db, major.id)
        .teacher_id(Some(teacher.id))
        .build()
        .await?;
    let student = crate::factory::student::StudentFactory::new(db, major.id)
        .class_id(Some(class.id))
        .build()
        .await?;

    Ok((major, teacher, class, subject, student))
}

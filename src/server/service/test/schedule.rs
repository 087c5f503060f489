use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::schedule::{CreateScheduleParams, UpdateScheduleParams},
    service::schedule::ScheduleService,
};

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

/// Tests that 09:00-09:40 and 09:20-10:00 clash for the same class and day.
///
/// Expected: the second write is rejected with a conflict message naming
/// the clashing subject and range.
#[tokio::test]
async fn rejects_overlapping_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) =
        factory::helpers::create_roster(db).await.unwrap();

    let service = ScheduleService::new(db);

    service
        .create(lesson(subject.id, teacher.id, class.id, "09:00", "09:40"))
        .await?;

    let result = service
        .create(lesson(subject.id, teacher.id, class.id, "09:20", "10:00"))
        .await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert!(message.contains("conflicts"));
            assert!(message.contains("09:00"));
        }
        other => panic!("expected conflict rejection, got {:?}", other.map(|s| s.id)),
    }

    Ok(())
}

/// Tests the end-exclusive boundary: 09:00-09:40 then 09:40-10:10 are fine.
#[tokio::test]
async fn accepts_back_to_back_lessons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) =
        factory::helpers::create_roster(db).await.unwrap();

    let service = ScheduleService::new(db);

    service
        .create(lesson(subject.id, teacher.id, class.id, "09:00", "09:40"))
        .await?;

    let second = service
        .create(lesson(subject.id, teacher.id, class.id, "09:40", "10:10"))
        .await?;

    assert_eq!(second.start_time, "09:40");

    Ok(())
}

/// Tests that updating a schedule in place does not conflict with itself.
#[tokio::test]
async fn update_excludes_own_row_from_conflict_scan() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) =
        factory::helpers::create_roster(db).await.unwrap();

    let service = ScheduleService::new(db);

    let schedule = service
        .create(lesson(subject.id, teacher.id, class.id, "09:00", "09:40"))
        .await?;

    // Same slot, new room; must not be treated as a clash with itself
    let updated = service
        .update(UpdateScheduleParams {
            id: schedule.id,
            subject_id: subject.id,
            teacher_id: teacher.id,
            class_id: class.id,
            day: "monday".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:40".to_string(),
            room: "Lab 1".to_string(),
            semester: 1,
            year: "2025/2026".to_string(),
            is_active: true,
        })
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().room, "Lab 1");

    Ok(())
}

/// Tests that an update moving into an occupied slot is rejected.
#[tokio::test]
async fn update_rejects_move_into_occupied_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) =
        factory::helpers::create_roster(db).await.unwrap();

    let service = ScheduleService::new(db);

    service
        .create(lesson(subject.id, teacher.id, class.id, "09:00", "09:40"))
        .await?;
    let movable = service
        .create(lesson(subject.id, teacher.id, class.id, "10:00", "10:40"))
        .await?;

    let result = service
        .update(UpdateScheduleParams {
            id: movable.id,
            subject_id: subject.id,
            teacher_id: teacher.id,
            class_id: class.id,
            day: "monday".to_string(),
            start_time: "09:30".to_string(),
            end_time: "10:30".to_string(),
            room: "R101".to_string(),
            semester: 1,
            year: "2025/2026".to_string(),
            is_active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that inactive schedules skip the conflict scan entirely.
#[tokio::test]
async fn inactive_schedule_skips_conflict_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) =
        factory::helpers::create_roster(db).await.unwrap();

    let service = ScheduleService::new(db);

    service
        .create(lesson(subject.id, teacher.id, class.id, "09:00", "09:40"))
        .await?;

    let mut inactive = lesson(subject.id, teacher.id, class.id, "09:00", "09:40");
    inactive.is_active = false;

    let created = service.create(inactive).await?;
    assert!(!created.is_active);

    Ok(())
}

/// Tests that dangling references are rejected before any write.
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) =
        factory::helpers::create_roster(db).await.unwrap();

    let service = ScheduleService::new(db);

    let result = service
        .create(lesson(9999, teacher.id, class.id, "09:00", "09:40"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .create(lesson(subject.id, teacher.id, 9999, "09:00", "09:40"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

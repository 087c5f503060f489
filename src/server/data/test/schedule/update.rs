use super::*;

/// Tests that update replaces the slot fields.
#[tokio::test]
async fn updates_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    let existing = factory::create_schedule(db, subject.id, teacher.id, class.id).await?;

    let repo = ScheduleRepository::new(db);

    let updated = repo
        .update(UpdateScheduleParams {
            id: existing.id,
            subject_id: subject.id,
            teacher_id: teacher.id,
            class_id: class.id,
            day: "friday".to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:30".to_string(),
            room: "Lab 2".to_string(),
            semester: 2,
            year: "2025/2026".to_string(),
            is_active: true,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.day, "friday");
    assert_eq!(updated.start_time, "10:00");
    assert_eq!(updated.room, "Lab 2");
    assert_eq!(updated.semester, 2);

    Ok(())
}

/// Tests that updating a missing schedule returns None.
#[tokio::test]
async fn returns_none_for_missing_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    let repo = ScheduleRepository::new(db);

    let updated = repo
        .update(UpdateScheduleParams {
            id: 999,
            subject_id: subject.id,
            teacher_id: teacher.id,
            class_id: class.id,
            day: "monday".to_string(),
            start_time: "07:00".to_string(),
            end_time: "08:00".to_string(),
            room: "R101".to_string(),
            semester: 1,
            year: "2025/2026".to_string(),
            is_active: true,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

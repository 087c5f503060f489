use super::*;

/// Tests the class, teacher and day filters.
#[tokio::test]
async fn filters_by_class_and_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;
    let other_class = factory::create_class(db, major.id).await?;

    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .day("monday")
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .day("tuesday")
        .start_time("09:00")
        .end_time("10:00")
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, other_class.id)
        .day("monday")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    let (schedules, total) = repo
        .get_paginated(0, 10, Some(class.id), None, None, false)
        .await?;
    assert_eq!(total, 2);
    assert_eq!(schedules.len(), 2);

    let (schedules, total) = repo
        .get_paginated(0, 10, Some(class.id), None, Some("monday"), false)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(schedules[0].day, "monday");
    assert_eq!(schedules[0].class_id, class.id);

    Ok(())
}

/// Tests that inactive schedules are hidden unless requested.
#[tokio::test]
async fn excludes_inactive_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    factory::create_schedule(db, subject.id, teacher.id, class.id).await?;
    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("10:00")
        .end_time("11:00")
        .is_active(false)
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    let (_, total) = repo.get_paginated(0, 10, None, None, None, false).await?;
    assert_eq!(total, 1);

    let (_, total) = repo.get_paginated(0, 10, None, None, None, true).await?;
    assert_eq!(total, 2);

    Ok(())
}

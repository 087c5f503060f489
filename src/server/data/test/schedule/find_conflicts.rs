use super::*;

/// Tests the three overlap cases against an existing 09:00-09:40 lesson.
///
/// A candidate starting inside, ending inside, or fully containing the
/// existing range must all be reported as conflicts.
#[tokio::test]
async fn detects_all_overlap_cases() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("09:00")
        .end_time("09:40")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    // Candidate start falls inside the existing range
    let conflicts = repo
        .find_conflicts(class.id, "monday", "09:20", "10:00", None)
        .await?;
    assert_eq!(conflicts.len(), 1);

    // Candidate end falls inside the existing range
    let conflicts = repo
        .find_conflicts(class.id, "monday", "08:30", "09:20", None)
        .await?;
    assert_eq!(conflicts.len(), 1);

    // Candidate fully contains the existing range
    let conflicts = repo
        .find_conflicts(class.id, "monday", "08:00", "11:00", None)
        .await?;
    assert_eq!(conflicts.len(), 1);

    // Candidate fully inside the existing range
    let conflicts = repo
        .find_conflicts(class.id, "monday", "09:10", "09:30", None)
        .await?;
    assert_eq!(conflicts.len(), 1);

    Ok(())
}

/// Tests the half-open boundaries.
///
/// A lesson ending exactly when another starts, or starting exactly when
/// another ends, is not a conflict.
#[tokio::test]
async fn accepts_touching_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("09:00")
        .end_time("09:40")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    // Starts exactly at the existing end
    let conflicts = repo
        .find_conflicts(class.id, "monday", "09:40", "10:10", None)
        .await?;
    assert!(conflicts.is_empty());

    // Ends exactly at the existing start
    let conflicts = repo
        .find_conflicts(class.id, "monday", "08:00", "09:00", None)
        .await?;
    assert!(conflicts.is_empty());

    Ok(())
}

/// Tests that the scan is scoped to the class and day.
#[tokio::test]
async fn scopes_to_class_and_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;
    let other_class = factory::create_class(db, major.id).await?;

    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("09:00")
        .end_time("09:40")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    // Same slot, different class
    let conflicts = repo
        .find_conflicts(other_class.id, "monday", "09:00", "09:40", None)
        .await?;
    assert!(conflicts.is_empty());

    // Same slot, different day
    let conflicts = repo
        .find_conflicts(class.id, "tuesday", "09:00", "09:40", None)
        .await?;
    assert!(conflicts.is_empty());

    Ok(())
}

/// Tests that inactive schedules never conflict and that `exclude_id`
/// skips the row being updated.
#[tokio::test]
async fn ignores_inactive_and_excluded_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    let inactive = factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("09:00")
        .end_time("09:40")
        .is_active(false)
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    let conflicts = repo
        .find_conflicts(class.id, "monday", "09:00", "09:40", None)
        .await?;
    assert!(conflicts.is_empty());

    let active = factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("10:00")
        .end_time("10:40")
        .build()
        .await?;

    // The row being updated must not conflict with itself
    let conflicts = repo
        .find_conflicts(class.id, "monday", "10:00", "10:40", Some(active.id))
        .await?;
    assert!(conflicts.is_empty());

    // But it does conflict when not excluded
    let conflicts = repo
        .find_conflicts(class.id, "monday", "10:00", "10:40", Some(inactive.id))
        .await?;
    assert_eq!(conflicts.len(), 1);

    Ok(())
}

/// Tests that conflict rows carry the related subject for error messages.
#[tokio::test]
async fn returns_related_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    factory::schedule::ScheduleFactory::new(db, subject.id, teacher.id, class.id)
        .start_time("09:00")
        .end_time("09:40")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);

    let conflicts = repo
        .find_conflicts(class.id, "monday", "09:00", "09:40", None)
        .await?;

    assert_eq!(conflicts.len(), 1);
    let (_, related_subject) = &conflicts[0];
    assert_eq!(related_subject.as_ref().unwrap().name, subject.name);

    Ok(())
}

use super::*;

/// Tests that create stores the lesson and enriches related names.
#[tokio::test]
async fn creates_schedule_with_related_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, teacher, class, subject, _student) = factory::helpers::create_roster(db).await?;

    let repo = ScheduleRepository::new(db);

    let schedule = repo
        .create(lesson(subject.id, teacher.id, class.id, "07:00", "08:30"))
        .await?;

    assert_eq!(schedule.day, "monday");
    assert_eq!(schedule.start_time, "07:00");
    assert_eq!(schedule.end_time, "08:30");
    assert_eq!(schedule.subject_name, subject.name);
    assert_eq!(schedule.teacher_name, teacher.name);
    assert_eq!(schedule.class_name, class.name);

    Ok(())
}

use super::*;

/// Tests the search filter against name substrings and exact NISN.
#[tokio::test]
async fn searches_by_name_and_nisn() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    factory::student::StudentFactory::new(db, major.id)
        .name("Alice Wijaya")
        .nisn("1001")
        .build()
        .await?;
    factory::student::StudentFactory::new(db, major.id)
        .name("Bob Santoso")
        .nisn("1002")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    let (students, total) = repo
        .get_paginated(0, 10, None, None, None, Some("Wijaya"), false)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(students[0].name, "Alice Wijaya");

    let (students, total) = repo
        .get_paginated(0, 10, None, None, None, Some("1002"), false)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(students[0].name, "Bob Santoso");

    let (_, total) = repo
        .get_paginated(0, 10, None, None, None, Some("no-such-student"), false)
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests the class and grade-level filters together.
#[tokio::test]
async fn filters_by_class_and_grade_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let class = factory::create_class(db, major.id).await?;

    factory::student::StudentFactory::new(db, major.id)
        .class_id(Some(class.id))
        .grade_level(10)
        .build()
        .await?;
    factory::student::StudentFactory::new(db, major.id)
        .class_id(Some(class.id))
        .grade_level(11)
        .build()
        .await?;
    factory::student::StudentFactory::new(db, major.id)
        .grade_level(10)
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    let (_, total) = repo
        .get_paginated(0, 10, Some(class.id), None, None, None, false)
        .await?;
    assert_eq!(total, 2);

    let (students, total) = repo
        .get_paginated(0, 10, Some(class.id), None, Some(10), None, false)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(students[0].grade_level, 10);

    Ok(())
}

use super::*;

/// Tests that `set_semester` touches every matching student in one statement.
#[tokio::test]
async fn sets_semester_for_all_matching() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let a = factory::create_student(db, major.id).await?;
    let b = factory::create_student(db, major.id).await?;
    let untouched = factory::create_student(db, major.id).await?;

    let repo = StudentRepository::new(db);

    let updated = repo.set_semester(&[a.id, b.id], 3).await?;
    assert_eq!(updated, 2);

    let a_row = entity::prelude::Student::find_by_id(a.id).one(db).await?.unwrap();
    let b_row = entity::prelude::Student::find_by_id(b.id).one(db).await?.unwrap();
    let c_row = entity::prelude::Student::find_by_id(untouched.id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(a_row.semester, 3);
    assert_eq!(b_row.semester, 3);
    assert_eq!(c_row.semester, 1);

    Ok(())
}

/// Tests that `set_grade_level` overwrites the grade unconditionally.
#[tokio::test]
async fn sets_grade_level_for_all_matching() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let a = factory::student::StudentFactory::new(db, major.id)
        .grade_level(10)
        .build()
        .await?;
    let b = factory::student::StudentFactory::new(db, major.id)
        .grade_level(12)
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    let updated = repo.set_grade_level(&[a.id, b.id], 11).await?;
    assert_eq!(updated, 2);

    for id in [a.id, b.id] {
        let row = entity::prelude::Student::find_by_id(id).one(db).await?.unwrap();
        assert_eq!(row.grade_level, 11);
    }

    Ok(())
}

/// Tests that `promote_grade` increments below the cap and skips students
/// already at the top grade.
///
/// Expected: the grade-10 student moves to 11, the grade-12 student stays,
/// and the returned row count reflects only the changed row.
#[tokio::test]
async fn promote_grade_clamps_at_top_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let junior = factory::student::StudentFactory::new(db, major.id)
        .grade_level(10)
        .build()
        .await?;
    let senior = factory::student::StudentFactory::new(db, major.id)
        .grade_level(12)
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    let matched = repo.count_existing(&[junior.id, senior.id]).await?;
    let updated = repo.promote_grade(&[junior.id, senior.id], 12).await?;

    assert_eq!(matched, 2);
    assert_eq!(updated, 1);

    let junior_row = entity::prelude::Student::find_by_id(junior.id)
        .one(db)
        .await?
        .unwrap();
    let senior_row = entity::prelude::Student::find_by_id(senior.id)
        .one(db)
        .await?
        .unwrap();

    assert_eq!(junior_row.grade_level, 11);
    assert_eq!(senior_row.grade_level, 12);

    Ok(())
}

/// Tests that unknown ids are simply not matched.
#[tokio::test]
async fn count_existing_ignores_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let student = factory::create_student(db, major.id).await?;

    let repo = StudentRepository::new(db);

    assert_eq!(repo.count_existing(&[student.id, 9999]).await?, 1);
    assert_eq!(repo.set_semester(&[student.id, 9999], 2).await?, 1);

    Ok(())
}

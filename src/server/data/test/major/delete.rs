use super::*;

/// Tests hard deletion of a major.
#[tokio::test]
async fn deletes_major() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;

    let repo = MajorRepository::new(db);

    assert!(repo.exists(major.id).await?);

    repo.delete(major.id).await?;

    assert!(!repo.exists(major.id).await?);
    let db_major = entity::prelude::Major::find_by_id(major.id).one(db).await?;
    assert!(db_major.is_none());

    Ok(())
}

/// Tests the dependency counts that back the delete guard.
///
/// Creates a full roster in one major and verifies each count, including
/// that inactive dependents are still counted.
#[tokio::test]
async fn counts_dependent_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (major, _teacher, _class, _subject, _student) = factory::helpers::create_roster(db).await?;

    // Add an inactive student; soft-deleted rows still block the delete
    factory::student::StudentFactory::new(db, major.id)
        .is_active(false)
        .build()
        .await?;

    let repo = MajorRepository::new(db);

    assert_eq!(repo.count_dependent_students(major.id).await?, 2);
    assert_eq!(repo.count_dependent_subjects(major.id).await?, 1);
    assert_eq!(repo.count_dependent_classes(major.id).await?, 1);

    // A fresh major has no dependents
    let empty = factory::create_major(db).await?;
    assert_eq!(repo.count_dependent_students(empty.id).await?, 0);
    assert_eq!(repo.count_dependent_subjects(empty.id).await?, 0);
    assert_eq!(repo.count_dependent_classes(empty.id).await?, 0);

    Ok(())
}

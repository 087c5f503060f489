use super::*;

/// Tests hard deletion and the grade dependency count.
#[tokio::test]
async fn deletes_student_and_counts_grades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, _teacher, _class, subject, student) = factory::helpers::create_roster(db).await?;

    let repo = StudentRepository::new(db);

    assert_eq!(repo.count_dependent_grades(student.id).await?, 0);

    factory::create_grade(db, student.id, subject.id).await?;
    assert_eq!(repo.count_dependent_grades(student.id).await?, 1);

    // A student without grades can be removed outright
    let major = factory::create_major(db).await?;
    let removable = factory::create_student(db, major.id).await?;

    repo.delete(removable.id).await?;

    assert!(!repo.exists(removable.id).await?);
    let row = entity::prelude::Student::find_by_id(removable.id).one(db).await?;
    assert!(row.is_none());

    Ok(())
}

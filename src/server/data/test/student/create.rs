use super::*;

use crate::server::model::student::CreateStudentParams;

/// Tests creating a student and the related-name enrichment.
#[tokio::test]
async fn creates_student_with_related_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let class = factory::create_class(db, major.id).await?;

    let repo = StudentRepository::new(db);

    let student = repo
        .create(CreateStudentParams {
            nisn: "1234567890".to_string(),
            name: "Test Student".to_string(),
            class_id: Some(class.id),
            major_id: major.id,
            semester: 1,
            grade_level: 10,
            is_active: true,
        })
        .await?;

    assert_eq!(student.nisn, "1234567890");
    assert_eq!(student.major_name, major.name);
    assert_eq!(student.class_name, Some(class.name));

    Ok(())
}

/// Tests that the unique index on NISN rejects duplicates.
#[tokio::test]
async fn rejects_duplicate_nisn() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    factory::student::StudentFactory::new(db, major.id)
        .nisn("555")
        .build()
        .await?;

    let result = factory::student::StudentFactory::new(db, major.id)
        .nisn("555")
        .build()
        .await;

    assert!(result.is_err());

    Ok(())
}

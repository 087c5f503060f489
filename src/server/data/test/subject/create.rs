use super::*;

/// Tests creation with related-name enrichment for major and teacher.
#[tokio::test]
async fn creates_subject_with_related_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    let teacher = factory::create_teacher(db).await?;

    let repo = SubjectRepository::new(db);

    let subject = repo
        .create(CreateSubjectParams {
            name: "Discrete Mathematics".to_string(),
            code: "MATH201".to_string(),
            description: None,
            credits: 3,
            major_id: major.id,
            teacher_id: Some(teacher.id),
            semester: 2,
            is_active: true,
        })
        .await?;

    assert_eq!(subject.code, "MATH201");
    assert_eq!(subject.major_name, major.name);
    assert_eq!(subject.teacher_name, Some(teacher.name));

    Ok(())
}

/// Tests that a subject without a teacher enriches to None.
#[tokio::test]
async fn creates_subject_without_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;

    let repo = SubjectRepository::new(db);

    let subject = repo
        .create(CreateSubjectParams {
            name: "Unassigned Subject".to_string(),
            code: "UN101".to_string(),
            description: None,
            credits: 2,
            major_id: major.id,
            teacher_id: None,
            semester: 1,
            is_active: true,
        })
        .await?;

    assert!(subject.teacher_id.is_none());
    assert!(subject.teacher_name.is_none());

    Ok(())
}

/// Tests that the unique index on code rejects duplicates.
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;
    factory::subject::SubjectFactory::new(db, major.id)
        .code("DUP1")
        .build()
        .await?;

    let result = factory::subject::SubjectFactory::new(db, major.id)
        .code("DUP1")
        .build()
        .await;

    assert!(result.is_err());

    Ok(())
}

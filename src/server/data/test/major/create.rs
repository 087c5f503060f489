use super::*;

/// Tests creating a major with all fields populated.
///
/// Expected: Ok with the stored values echoed back and the row present in
/// the database.
#[tokio::test]
async fn creates_major() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MajorRepository::new(db);

    let mut params = create_params("Computer Science", "CS");
    params.facilities = vec!["Computer Lab".to_string()];
    params.career_prospects = vec!["Software Developer".to_string()];

    let major = repo.create(params).await?;

    assert_eq!(major.name, "Computer Science");
    assert_eq!(major.code, "CS");
    assert_eq!(major.facilities, vec!["Computer Lab".to_string()]);
    assert_eq!(
        major.career_prospects,
        vec!["Software Developer".to_string()]
    );
    assert!(major.is_active);

    // Verify the row exists in the database
    let db_major = entity::prelude::Major::find_by_id(major.id).one(db).await?;
    assert!(db_major.is_some());
    assert_eq!(db_major.unwrap().code, "CS");

    Ok(())
}

/// Tests that the unique index on code rejects duplicates.
///
/// Expected: first insert succeeds, second insert with the same code fails.
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MajorRepository::new(db);

    repo.create(create_params("Computer Science", "CS")).await?;

    let result = repo.create(create_params("Cyber Security", "CS")).await;

    assert!(result.is_err());

    Ok(())
}

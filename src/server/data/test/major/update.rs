use super::*;

/// Tests that update replaces every mutable field.
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await?;

    let repo = MajorRepository::new(db);

    let updated = repo
        .update(UpdateMajorParams {
            id: major.id,
            name: "Renamed Major".to_string(),
            code: "RN".to_string(),
            description: "Updated description".to_string(),
            image_url: Some("https://example.com/m.jpg".to_string()),
            facilities: vec!["Library".to_string()],
            career_prospects: vec![],
            total_students: 42,
            is_active: false,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Renamed Major");
    assert_eq!(updated.code, "RN");
    assert_eq!(updated.total_students, 42);
    assert!(!updated.is_active);

    // Verify persistence
    let db_major = entity::prelude::Major::find_by_id(major.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_major.name, "Renamed Major");
    assert!(!db_major.is_active);

    Ok(())
}

/// Tests that updating a missing major returns None.
#[tokio::test]
async fn returns_none_for_missing_major() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MajorRepository::new(db);

    let updated = repo
        .update(UpdateMajorParams {
            id: 4242,
            name: "Ghost".to_string(),
            code: "GH".to_string(),
            description: String::new(),
            image_url: None,
            facilities: vec![],
            career_prospects: vec![],
            total_students: 0,
            is_active: true,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

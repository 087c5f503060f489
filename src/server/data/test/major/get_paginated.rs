use super::*;

/// Tests that inactive majors are hidden from the default listing.
///
/// Expected: only the active major is returned and counted.
#[tokio::test]
async fn excludes_inactive_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::major::MajorFactory::new(db)
        .name("Active Major")
        .build()
        .await?;
    factory::major::MajorFactory::new(db)
        .name("Retired Major")
        .is_active(false)
        .build()
        .await?;

    let repo = MajorRepository::new(db);

    let (majors, total) = repo.get_paginated(0, 10, false).await?;

    assert_eq!(total, 1);
    assert_eq!(majors.len(), 1);
    assert_eq!(majors[0].name, "Active Major");

    Ok(())
}

/// Tests that `include_inactive` returns everything.
#[tokio::test]
async fn includes_inactive_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_major(db).await?;
    factory::major::MajorFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = MajorRepository::new(db);

    let (majors, total) = repo.get_paginated(0, 10, true).await?;

    assert_eq!(total, 2);
    assert_eq!(majors.len(), 2);

    Ok(())
}

/// Tests page slicing and name ordering.
///
/// Expected: three majors with per_page 2 yield a full first page and a
/// single-item second page, ordered alphabetically.
#[tokio::test]
async fn paginates_and_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Major)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Culinary Arts", "Accounting", "Broadcasting"] {
        factory::major::MajorFactory::new(db).name(name).build().await?;
    }

    let repo = MajorRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2, false).await?;
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].name, "Accounting");
    assert_eq!(first_page[1].name, "Broadcasting");

    let (second_page, _) = repo.get_paginated(1, 2, false).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Culinary Arts");

    Ok(())
}

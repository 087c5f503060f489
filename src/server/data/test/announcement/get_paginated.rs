use super::*;

/// Tests that the public listing hides drafts.
#[tokio::test]
async fn hides_drafts_when_published_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::announcement::AnnouncementFactory::new(db)
        .title("Public notice")
        .is_published(true)
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db)
        .title("Draft notice")
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);

    let (announcements, total) = repo.get_paginated(0, 10, None, true).await?;
    assert_eq!(total, 1);
    assert_eq!(announcements[0].title, "Public notice");

    let (_, total) = repo.get_paginated(0, 10, None, false).await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests the category filter.
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::announcement::AnnouncementFactory::new(db)
        .category("exam")
        .is_published(true)
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db)
        .category("event")
        .is_published(true)
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);

    let (announcements, total) = repo.get_paginated(0, 10, Some("exam"), true).await?;
    assert_eq!(total, 1);
    assert_eq!(announcements[0].category, "exam");

    Ok(())
}

use super::*;

/// Tests that creating a published announcement stamps `published_at`.
#[tokio::test]
async fn create_published_stamps_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);

    let announcement = repo
        .create(CreateAnnouncementParams {
            title: "Exam week".to_string(),
            content: "Exams start Monday".to_string(),
            category: "exam".to_string(),
            priority: "important".to_string(),
            is_published: true,
        })
        .await?;

    assert!(announcement.is_published);
    assert!(announcement.published_at.is_some());

    Ok(())
}

/// Tests that drafts carry no publish timestamp.
#[tokio::test]
async fn create_draft_has_no_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);

    let announcement = repo
        .create(CreateAnnouncementParams {
            title: "Draft".to_string(),
            content: "Not yet".to_string(),
            category: "general".to_string(),
            priority: "normal".to_string(),
            is_published: false,
        })
        .await?;

    assert!(!announcement.is_published);
    assert!(announcement.published_at.is_none());

    Ok(())
}

/// Tests the publish-once rule across updates.
///
/// The first publish stamps `published_at`; publishing again, or
/// unpublishing and re-publishing, keeps the original timestamp.
#[tokio::test]
async fn first_publish_stamps_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let draft = factory::create_announcement(db).await?;
    assert!(draft.published_at.is_none());

    let repo = AnnouncementRepository::new(db);

    // First publish
    let published = repo.update(update_params(draft.id, true)).await?.unwrap();
    let first_published_at = published.published_at;
    assert!(first_published_at.is_some());

    // Publishing again keeps the original timestamp
    let republished = repo.update(update_params(draft.id, true)).await?.unwrap();
    assert_eq!(republished.published_at, first_published_at);

    // Unpublish, then publish again; the timestamp still survives
    let unpublished = repo.update(update_params(draft.id, false)).await?.unwrap();
    assert!(!unpublished.is_published);
    assert_eq!(unpublished.published_at, first_published_at);

    let restored = repo.update(update_params(draft.id, true)).await?.unwrap();
    assert_eq!(restored.published_at, first_published_at);

    Ok(())
}

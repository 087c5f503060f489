use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::major::MajorService};

/// Tests the referential-integrity guard on delete.
///
/// A major with one dependent student must survive the delete attempt and
/// the error message must carry the dependent count.
#[tokio::test]
async fn delete_rejected_while_dependents_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await.unwrap();
    factory::create_student(db, major.id).await.unwrap();

    let service = MajorService::new(db);

    let result = service.delete(major.id).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert!(message.contains("1 dependent record"));
        }
        other => panic!("expected guard rejection, got {:?}", other),
    }

    // The major still exists afterwards
    assert!(service.get_by_id(major.id).await?.is_some());

    Ok(())
}

/// Tests that a major without dependents is deleted.
#[tokio::test]
async fn delete_succeeds_without_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await.unwrap();

    let service = MajorService::new(db);

    assert!(service.delete(major.id).await?);
    assert!(service.get_by_id(major.id).await?.is_none());

    Ok(())
}

/// Tests that deleting an unknown major reports not-found.
#[tokio::test]
async fn delete_missing_major_returns_false() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MajorService::new(db);

    assert!(!service.delete(4242).await?);

    Ok(())
}

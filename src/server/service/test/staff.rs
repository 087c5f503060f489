use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::staff::{CreateStaffParams, UpdateStaffParams},
    service::staff::StaffService,
};

fn headmaster_params(name: &str) -> CreateStaffParams {
    CreateStaffParams {
        name: name.to_string(),
        role: "headmaster".to_string(),
        position: "Headmaster".to_string(),
        image_url: None,
        display_order: 0,
        is_active: true,
    }
}

/// Tests that a second active headmaster cannot be created.
#[tokio::test]
async fn rejects_second_active_headmaster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StaffService::new(db);

    service.create(headmaster_params("First Head")).await?;

    let result = service.create(headmaster_params("Second Head")).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert!(message.contains("headmaster"));
        }
        other => panic!("expected invariant rejection, got {:?}", other.map(|s| s.id)),
    }

    Ok(())
}

/// Tests that promoting an existing member to headmaster is also guarded.
#[tokio::test]
async fn rejects_promotion_to_second_headmaster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StaffService::new(db);

    service.create(headmaster_params("Incumbent")).await?;
    let teacher = factory::create_staff(db).await.unwrap();

    let result = service
        .update(UpdateStaffParams {
            id: teacher.id,
            name: teacher.name.clone(),
            role: "headmaster".to_string(),
            position: "Headmaster".to_string(),
            image_url: None,
            display_order: 0,
            is_active: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that updating the incumbent headmaster in place stays allowed.
#[tokio::test]
async fn allows_updating_incumbent_headmaster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StaffService::new(db);

    let incumbent = service.create(headmaster_params("Incumbent")).await?;

    let updated = service
        .update(UpdateStaffParams {
            id: incumbent.id,
            name: "Renamed Incumbent".to_string(),
            role: "headmaster".to_string(),
            position: "Headmaster".to_string(),
            image_url: None,
            display_order: 1,
            is_active: true,
        })
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().name, "Renamed Incumbent");

    Ok(())
}

/// Tests that a deactivated headmaster frees the seat.
#[tokio::test]
async fn allows_new_headmaster_after_deactivation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StaffService::new(db);

    let retiring = service.create(headmaster_params("Retiring Head")).await?;
    assert!(service.delete(retiring.id).await?);

    let successor = service.create(headmaster_params("Successor")).await?;
    assert_eq!(successor.role, "headmaster");

    Ok(())
}

use super::*;

/// Tests the headmaster existence check that backs the write invariant.
#[tokio::test]
async fn detects_active_headmaster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);

    assert!(!repo.active_headmaster_exists(None).await?);

    let headmaster = factory::staff::StaffFactory::new(db)
        .role("headmaster")
        .position("Headmaster")
        .build()
        .await?;

    assert!(repo.active_headmaster_exists(None).await?);

    // The row itself is excluded when updating in place
    assert!(!repo.active_headmaster_exists(Some(headmaster.id)).await?);

    Ok(())
}

/// Tests that an inactive headmaster does not block a new appointment.
#[tokio::test]
async fn ignores_inactive_headmaster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::staff::StaffFactory::new(db)
        .role("headmaster")
        .is_active(false)
        .build()
        .await?;

    let repo = StaffRepository::new(db);

    assert!(!repo.active_headmaster_exists(None).await?);

    Ok(())
}

/// Tests that deactivation clears the active flag without removing the row.
#[tokio::test]
async fn deactivate_is_a_soft_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff(db).await?;

    let repo = StaffRepository::new(db);

    repo.deactivate(staff.id).await?;

    let row = repo.get_by_id(staff.id).await?;
    assert!(row.is_some());
    assert!(!row.unwrap().is_active);

    Ok(())
}

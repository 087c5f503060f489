use super::*;

use crate::server::model::staff::Organization;

/// Tests that the organization source list is active-only and ordered.
#[tokio::test]
async fn lists_active_staff_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::staff::StaffFactory::new(db)
        .name("Second")
        .display_order(2)
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("First")
        .display_order(1)
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("Hidden")
        .is_active(false)
        .build()
        .await?;

    let repo = StaffRepository::new(db);

    let staff = repo.get_all_active_ordered().await?;

    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0].name, "First");
    assert_eq!(staff[1].name, "Second");

    Ok(())
}

/// Tests the role grouping that builds the organization chart.
///
/// Vice roles are grouped by prefix; unknown roles fall into support.
#[tokio::test]
async fn groups_staff_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::staff::StaffFactory::new(db)
        .name("The Headmaster")
        .role("headmaster")
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("Curriculum Vice")
        .role("vice_headmaster_curriculum")
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("Students Vice")
        .role("vice_headmaster_students")
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("A Teacher")
        .role("teacher")
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("Office Admin")
        .role("administration")
        .build()
        .await?;
    factory::staff::StaffFactory::new(db)
        .name("Caretaker")
        .role("support")
        .build()
        .await?;

    let repo = StaffRepository::new(db);

    let organization = Organization::from_staff(repo.get_all_active_ordered().await?);

    assert_eq!(organization.headmaster.unwrap().name, "The Headmaster");
    assert_eq!(organization.vice_headmasters.len(), 2);
    assert_eq!(organization.teachers.len(), 1);
    assert_eq!(organization.administration.len(), 1);
    assert_eq!(organization.support.len(), 1);

    Ok(())
}

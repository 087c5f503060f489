use super::*;

/// Tests account creation and lookup by username.
#[tokio::test]
async fn creates_and_finds_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create(CreateUserParams {
            username: "headoffice".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
        })
        .await?;

    assert_eq!(user.username, "headoffice");
    assert_eq!(user.role, "admin");
    assert!(user.is_active);

    let found = repo.find_by_username("headoffice").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().password_hash, "hash");

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests the admin-existence check used by the startup bootstrap.
///
/// Teacher-role and deactivated admin accounts must not count.
#[tokio::test]
async fn admin_exists_requires_active_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    factory::user::UserFactory::new(db).role("teacher").build().await?;
    assert!(!repo.admin_exists().await?);

    factory::user::UserFactory::new(db)
        .role("admin")
        .is_active(false)
        .build()
        .await?;
    assert!(!repo.admin_exists().await?);

    factory::user::UserFactory::new(db).role("admin").build().await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests that usernames are unique.
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let result = factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await;

    assert!(result.is_err());

    Ok(())
}

use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::JwtKeys,
    service::auth::AuthService,
};

const TEST_SECRET: &str = "test-secret";

async fn seed_account(
    db: &sea_orm::DatabaseConnection,
    username: &str,
    password: &str,
    role: &str,
    is_active: bool,
) -> entity::user::Model {
    let hash = bcrypt::hash(password, 4).unwrap();

    factory::user::UserFactory::new(db)
        .username(username)
        .password_hash(hash)
        .role(role)
        .is_active(is_active)
        .build()
        .await
        .unwrap()
}

/// Tests a successful login and that the issued token carries the role.
#[tokio::test]
async fn login_issues_verifiable_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_account(db, "principal", "correct horse", "admin", true).await;

    let keys = JwtKeys::new(TEST_SECRET);
    let service = AuthService::new(db, &keys);

    let (token, user) = service.login("principal", "correct horse").await?;

    assert_eq!(user.username, "principal");
    assert_eq!(user.role, "admin");

    let claims = keys.verify(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "admin");

    Ok(())
}

/// Tests that a wrong password is rejected without detail.
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_account(db, "principal", "correct horse", "admin", true).await;

    let keys = JwtKeys::new(TEST_SECRET);
    let service = AuthService::new(db, &keys);

    let result = service.login("principal", "wrong horse").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::BadCredentials))
    ));
}

/// Tests that unknown usernames and deactivated accounts fail the same way.
#[tokio::test]
async fn login_rejects_unknown_and_inactive_accounts() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_account(db, "retired", "correct horse", "teacher", false).await;

    let keys = JwtKeys::new(TEST_SECRET);
    let service = AuthService::new(db, &keys);

    let unknown = service.login("nobody", "whatever").await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::BadCredentials))
    ));

    let inactive = service.login("retired", "correct horse").await;
    assert!(matches!(
        inactive,
        Err(AppError::AuthErr(AuthError::BadCredentials))
    ));
}

/// Tests that `me` resolves the caller and 404s when the account is gone.
#[tokio::test]
async fn me_resolves_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = seed_account(db, "principal", "pw", "admin", true).await;

    let keys = JwtKeys::new(TEST_SECRET);
    let service = AuthService::new(db, &keys);

    let user = service.me(account.id).await?;
    assert_eq!(user.username, "principal");

    let missing = service.me(9999).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

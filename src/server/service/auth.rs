use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::JwtKeys,
    model::user::User,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown usernames, wrong passwords and deactivated accounts all
    /// surface as the same `BadCredentials` error so a caller cannot probe
    /// which usernames exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(account) = repo.find_by_username(username).await? else {
            return Err(AuthError::BadCredentials.into());
        };

        if !account.is_active {
            return Err(AuthError::BadCredentials.into());
        }

        let verified = bcrypt::verify(password, &account.password_hash)
            .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))?;

        if !verified {
            return Err(AuthError::BadCredentials.into());
        }

        let token = self
            .keys
            .sign(account.id, &account.username, &account.role)?;

        Ok((token, User::from_entity(account)))
    }

    /// Resolves the authenticated caller's account.
    pub async fn me(&self, user_id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

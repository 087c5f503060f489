//! Login account domain model.

use crate::model::auth::UserDto;

/// A login account without its password hash.
///
/// The hash stays inside the data layer; everything above works with this
/// stripped representation.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub is_active: bool,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            role: entity.role,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role,
            is_active: self.is_active,
        }
    }
}

/// Parameters for creating a login account.
///
/// The password is already hashed by the caller; this type never carries
/// plaintext credentials.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

//! Bearer-token authentication guard.
//!
//! Every protected handler calls `AuthGuard::require` with the roles allowed
//! on that route. The guard reads the `Authorization: Bearer <jwt>` header,
//! verifies the HS256 signature and expiry, and checks the role claim.
//! Token verification is purely local; no database round trip is involved.

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Token lifetime. Re-login is required afterwards; there is no refresh flow.
const TOKEN_TTL_HOURS: i64 = 24;

/// Application roles carried in the token's `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }
}

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub username: String,
    pub role: String,
    /// Expiry as a Unix timestamp, set at issue time.
    pub exp: i64,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// HS256 signing and verification keys derived from `JWT_SECRET`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for the given user valid for `TOKEN_TTL_HOURS`.
    pub fn sign(&self, user_id: i32, username: &str, role: &str) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            role: role.to_string(),
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(InternalError::SignToken)?;

        Ok(token)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

pub struct AuthGuard<'a> {
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    /// Verifies the request's bearer token and checks its role claim.
    ///
    /// An empty `roles` slice accepts any authenticated caller. Otherwise the
    /// claim must parse to one of the listed roles.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims of the caller
    /// - `Err(AuthError::MissingToken)` - No usable Authorization header (401)
    /// - `Err(AuthError::InvalidToken)` - Bad signature or expired token (401)
    /// - `Err(AuthError::AccessDenied)` - Valid token, insufficient role (403)
    pub fn require(&self, roles: &[Role]) -> Result<Claims, AppError> {
        let token = self.bearer_token()?;
        let claims = self.keys.verify(token)?;

        if roles.is_empty() {
            return Ok(claims);
        }

        match claims.role() {
            Some(role) if roles.contains(&role) => Ok(claims),
            _ => Err(AuthError::AccessDenied(claims.role.clone()).into()),
        }
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let value = self
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MissingToken)?;

        value.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)
    }
}

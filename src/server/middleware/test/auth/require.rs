use super::*;

use crate::server::middleware::auth::AuthGuard;

/// Tests that an admin token passes the admin requirement.
///
/// Expected: Ok(Claims) echoing the signed identity.
#[test]
fn grants_access_to_admin_token() {
    let keys = keys();
    let token = keys.sign(1, "headoffice", "admin").unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    let claims = result.unwrap();
    assert_eq!(claims.sub, 1);
    assert_eq!(claims.username, "headoffice");
    assert_eq!(claims.role, "admin");
}

/// Tests that a valid teacher token is refused on an admin route.
///
/// Expected: Err(AuthError::AccessDenied), which maps to 403.
#[test]
fn denies_teacher_token_on_admin_route() {
    let keys = keys();
    let token = keys.sign(2, "homeroom", "teacher").unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(role))) if role == "teacher"
    ));
}

/// Tests that a request without an Authorization header is refused.
///
/// Expected: Err(AuthError::MissingToken), which maps to 401.
#[test]
fn rejects_missing_header() {
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a non-bearer Authorization header is refused.
#[test]
fn rejects_non_bearer_header() {
    let keys = keys();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwdw=="),
    );

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a token signed with a different secret is refused.
///
/// Expected: Err(AuthError::InvalidToken), which maps to 401.
#[test]
fn rejects_token_with_wrong_signature() {
    let other_keys = JwtKeys::new("some-other-secret");
    let forged = other_keys.sign(1, "intruder", "admin").unwrap();
    let headers = bearer_headers(&forged);

    let keys = keys();
    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that an expired token is refused.
#[test]
fn rejects_expired_token() {
    let keys = keys();

    // Sign an already-expired claim set with the real secret
    let claims = Claims {
        sub: 1,
        username: "late".to_string(),
        role: "admin".to_string(),
        exp: (chrono::Utc::now() - chrono::Duration::hours(2)).timestamp(),
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that an empty role list accepts any authenticated caller.
#[test]
fn empty_role_list_accepts_any_authenticated_caller() {
    let keys = keys();
    let token = keys.sign(3, "pupil", "student").unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&keys, &headers).require(&[]);

    assert_eq!(result.unwrap().role, "student");
}

/// Tests that a role list with several entries accepts each of them.
#[test]
fn accepts_any_listed_role() {
    let keys = keys();

    for role in ["admin", "teacher"] {
        let token = keys.sign(4, "multi", role).unwrap();
        let headers = bearer_headers(&token);

        let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin, Role::Teacher]);
        assert!(result.is_ok());
    }

    let token = keys.sign(4, "multi", "student").unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin, Role::Teacher]);
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));
}

/// Tests that a token carrying an unknown role claim is denied.
#[test]
fn rejects_unknown_role_claim() {
    let keys = keys();
    let token = keys.sign(5, "odd", "superuser").unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&keys, &headers).require(&[Role::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));
}

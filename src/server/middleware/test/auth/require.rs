use super::*;

/// Tests a valid bearer token.
///
/// Expected: Ok(AuthUser) carrying the token's user uuid and login source
#[test]
fn accepts_valid_token() {
    let token = jwt::sign("user-1", "Github", SECRET).unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let user = AuthGuard::new(SECRET, &headers).require().unwrap();

    assert_eq!(user.user_uuid, "user-1");
    assert_eq!(user.login_source, "Github");
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let headers = HeaderMap::new();

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(result, Err(AuthError::MissingToken)));
}

/// Tests Authorization headers that do not carry a bearer token.
///
/// Expected: Err(AuthError::MalformedHeader)
#[test]
fn rejects_non_bearer_header() {
    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "token"] {
        let headers = headers_with(value);

        let result = AuthGuard::new(SECRET, &headers).require();

        assert!(
            matches!(result, Err(AuthError::MalformedHeader)),
            "{value} must be rejected as malformed"
        );
    }
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_token_with_wrong_signature() {
    let token = jwt::sign("user-1", "Github", "other-secret").unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

/// Tests a value that is not a JWT at all.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_garbage_token() {
    let headers = headers_with("Bearer not-a-jwt");

    let result = AuthGuard::new(SECRET, &headers).require();

    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
    util::jwt,
};

/// The signed-in user a request was made on behalf of.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_uuid: String,
    pub login_source: String,
}

/// Checks the bearer token of a request.
pub struct AuthGuard<'a> {
    secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self { secret, headers }
    }

    /// Requires a valid `Authorization: Bearer <jwt>` header.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token verified
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::MalformedHeader)` - Header is not a bearer token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed claims
    pub fn require(&self) -> Result<AuthUser, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken);
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let claims = jwt::verify(token, self.secret)?;

        Ok(AuthUser {
            user_uuid: claims.user_uuid,
            login_source: claims.login_source,
        })
    }
}

/// Rejects the request with 401 before the body is read when the token is not valid.
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.jwt_secret, &parts.headers).require()?;

        tracing::debug!(
            user_uuid = %user.user_uuid,
            login_source = %user.login_source,
            "authenticated request"
        );

        Ok(user)
    }
}

//! Access token signing and verification.
//!
//! Tokens are HS256 JWTs whose claims carry the user's uuid and the provider the user
//! signed in with.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

#[cfg(test)]
pub use issue::sign;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    #[serde(rename = "userUUID")]
    pub user_uuid: String,
    #[serde(rename = "loginSource")]
    pub login_source: String,
    pub iat: usize,
    pub exp: usize,
}

/// Verifies signature and expiry of `token` and returns its claims.
pub fn verify(token: &str, secret: &str) -> Result<AccessClaims, AuthError> {
    let token_data = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(AuthError::InvalidToken)?;

    Ok(token_data.claims)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorCode, ResponseDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Missing Authorization header")]
    MissingToken,

    /// `Authorization` header is present but is not a `Bearer <token>` value.
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    /// Token failed signature, expiry or claim validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized with the `AuthFailed` status and the
/// `JWTSignFailed` code. Details are logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ResponseDto::<()>::auth_failed(ErrorCode::JWTSignFailed)),
        )
            .into_response()
    }
}

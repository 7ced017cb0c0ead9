//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into response envelopes. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements `IntoResponse`
//! so handlers can return `Result<_, AppError>` and use `?` throughout.

pub mod auth;
pub mod config;
pub mod internal;
pub mod upstream;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ResponseDto},
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, upstream::UpstreamError,
    },
};

/// Top-level application error type.
///
/// Every variant maps to a wire `ErrorCode` through [`AppError::error_code`]. Failures
/// the caller can act on (bad parameters, unknown user or room) answer with their own
/// code; everything else collapses into `CurrentProcessFailed`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for the 401 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Third-party service answered with an unusable body.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// Unexpected data inside the application's own database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest, including non-2xx upstream statuses.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Listener or socket error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed schema or business validation.
    ///
    /// # Fields
    /// - Message describing which check failed, logged at debug level only
    #[error("Parameter check failed: {0}")]
    ParamsCheckFailed(String),

    /// No live user with the given uuid.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// No room with the given uuid that the caller belongs to.
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// A multi-step operation failed after validation; details were logged where it failed.
    #[error("Current process failed")]
    CurrentProcessFailed,
}

impl AppError {
    /// The code reported to the client for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::AuthErr(_) => ErrorCode::JWTSignFailed,
            Self::ParamsCheckFailed(_) => ErrorCode::ParamsCheckFailed,
            Self::UserNotFound(_) => ErrorCode::UserNotFound,
            Self::RoomNotFound(_) => ErrorCode::RoomNotFound,
            _ => ErrorCode::CurrentProcessFailed,
        }
    }
}

/// Converts application errors into response envelopes.
///
/// Authentication errors delegate to their own response handling. Caller-facing failures
/// are answered with HTTP 200 and their specific code. Anything else is logged in full and
/// answered with the generic `CurrentProcessFailed` code so internals do not leak.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ParamsCheckFailed(ref msg) => {
                tracing::debug!("Parameter check failed: {}", msg);
                Json(ResponseDto::<()>::failed(self.error_code())).into_response()
            }
            Self::UserNotFound(_) | Self::RoomNotFound(_) | Self::CurrentProcessFailed => {
                Json(ResponseDto::<()>::failed(self.error_code())).into_response()
            }
            err => ProcessFailed(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into the generic failure envelope.
///
/// Logs the error and answers `{"status": 1, "code": CurrentProcessFailed}`. Used as the
/// fallback for errors that have no caller-facing code.
pub struct ProcessFailed<E>(pub E);

impl<E: std::fmt::Debug> IntoResponse for ProcessFailed<E> {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request failed");

        Json(ResponseDto::<()>::failed(ErrorCode::CurrentProcessFailed)).into_response()
    }
}

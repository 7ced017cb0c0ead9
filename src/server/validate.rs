//! Declarative request body checks.
//!
//! Each request DTO implements [`Validate`] with the constraints of its route. Handlers
//! take the body as [`ValidJson<T>`], which deserializes it and runs those constraints
//! before the handler is called. Any failure answers with `ParamsCheckFailed`.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    model::{
        agora::AgoraAiStopDto,
        room::{CreateOrdinaryRoomDto, OrdinaryRoomInfoQueryDto},
    },
    server::{error::AppError, util::time::is_unix_timestamp_millis},
};

/// Longest room title accepted, in characters.
pub const MAX_TITLE_LENGTH: usize = 50;
/// Most documents that can be attached to a room at creation.
pub const MAX_DOCS: usize = 10;

/// Constraints a request body must satisfy once deserialized.
pub trait Validate {
    /// # Returns
    /// - `Ok(())` - Every constraint holds
    /// - `Err(String)` - Description of the first failed constraint
    fn validate(&self) -> Result<(), String>;
}

/// JSON body extractor that runs [`Validate`] after deserializing.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ParamsCheckFailed(rejection.body_text()))?;

        value.validate().map_err(AppError::ParamsCheckFailed)?;

        Ok(Self(value))
    }
}

impl Validate for CreateOrdinaryRoomDto {
    fn validate(&self) -> Result<(), String> {
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Err(format!("title is longer than {} characters", MAX_TITLE_LENGTH));
        }

        if !is_unix_timestamp_millis(self.begin_time) {
            return Err(format!("beginTime is not a millisecond timestamp: {}", self.begin_time));
        }

        if let Some(end_time) = self.end_time {
            if !is_unix_timestamp_millis(end_time) {
                return Err(format!("endTime is not a millisecond timestamp: {}", end_time));
            }
        }

        if let Some(docs) = &self.docs {
            if docs.len() > MAX_DOCS {
                return Err(format!("more than {} docs", MAX_DOCS));
            }
        }

        Ok(())
    }
}

impl Validate for OrdinaryRoomInfoQueryDto {
    fn validate(&self) -> Result<(), String> {
        if self.room_uuid.is_empty() {
            return Err("roomUUID is empty".to_string());
        }

        Ok(())
    }
}

/// All three fields are required, which deserialization already enforces.
impl Validate for AgoraAiStopDto {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// The user info route takes an empty object.
impl Validate for serde_json::Map<String, serde_json::Value> {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

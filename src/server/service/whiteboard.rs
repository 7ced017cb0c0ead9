//! Whiteboard service client.
//!
//! Creates the collaborative whiteboard room that backs every classroom room.

use serde::{Deserialize, Serialize};

use crate::server::{
    config::WhiteboardConfig,
    error::{upstream::UpstreamError, AppError},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWhiteboardRoomRequest {
    is_record: bool,
    limit: u32,
}

#[derive(Deserialize)]
struct CreateWhiteboardRoomResponse {
    uuid: Option<String>,
}

pub struct WhiteboardService<'a> {
    pub http_client: &'a reqwest::Client,
    pub config: &'a WhiteboardConfig,
}

impl<'a> WhiteboardService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a WhiteboardConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Creates a recorded whiteboard room without a participant limit.
    ///
    /// Sends `POST {api_url}/rooms` authenticated with the SDK token and region headers.
    ///
    /// # Returns
    /// - `Ok(String)` - uuid of the new whiteboard room
    /// - `Err(AppError::ReqwestErr)` - Transport failure or non-2xx status
    /// - `Err(AppError::UpstreamErr)` - Response carries no room uuid
    pub async fn create_room(&self) -> Result<String, AppError> {
        let body = self
            .http_client
            .post(format!("{}/rooms", self.config.api_url))
            .header("token", &self.config.sdk_token)
            .header("region", &self.config.region)
            .json(&CreateWhiteboardRoomRequest {
                is_record: true,
                limit: 0,
            })
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let uuid = serde_json::from_str::<CreateWhiteboardRoomResponse>(&body)
            .ok()
            .and_then(|response| response.uuid)
            .filter(|uuid| !uuid.is_empty());

        uuid.ok_or_else(|| UpstreamError::MissingWhiteboardRoomUuid { body }.into())
    }
}

//! AI conversation relay.
//!
//! Forwards a conversation request to the regional AI service and hands back whatever
//! it answered.

use serde::Serialize;
use serde_json::Value;

use crate::server::{config::AgoraAiConfig, error::AppError};

#[derive(Serialize)]
struct AgoraAiRequest<'r> {
    request_id: &'r str,
    channel_name: &'r str,
}

pub struct AgoraAiService<'a> {
    pub http_client: &'a reqwest::Client,
    pub config: &'a AgoraAiConfig,
}

impl<'a> AgoraAiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a AgoraAiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Posts `{request_id, channel_name}` to `{base}/start` of the region picked by `language`.
    ///
    /// JSON responses are returned unchanged. Any other body is returned as a JSON string.
    ///
    /// # Returns
    /// - `Ok(Value)` - Upstream response body
    /// - `Err(AppError::ReqwestErr)` - Transport failure or non-2xx status
    pub async fn start(
        &self,
        language: &str,
        request_id: &str,
        channel_name: &str,
    ) -> Result<Value, AppError> {
        let url = format!("{}/start", self.config.server_url(language));

        let body = self
            .http_client
            .post(url)
            .json(&AgoraAiRequest {
                request_id,
                channel_name,
            })
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body)))
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the AI conversation relay.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AgoraAiStopDto {
    pub request_id: String,
    pub channel_name: String,
    /// `"zh"` selects the China-region service, anything else the default region.
    pub language: String,
}

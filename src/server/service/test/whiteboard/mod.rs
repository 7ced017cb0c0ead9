use axum::http::StatusCode;
use serde_json::json;
use test_utils::upstream::FakeUpstream;

use crate::server::{
    config::WhiteboardConfig,
    error::{upstream::UpstreamError, AppError},
    service::whiteboard::WhiteboardService,
};

mod create_room;

fn config(upstream: &FakeUpstream) -> WhiteboardConfig {
    WhiteboardConfig {
        api_url: upstream.base_url().to_string(),
        sdk_token: "sdk-token".to_string(),
        region: "us-sv".to_string(),
    }
}

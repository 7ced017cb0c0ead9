use axum::http::StatusCode;
use serde_json::json;
use test_utils::upstream::FakeUpstream;

use crate::server::{config::AgoraAiConfig, error::AppError, service::agora::AgoraAiService};

mod start;

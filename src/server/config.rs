use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_WHITEBOARD_API_URL: &str = "https://api.netless.link/v5";
const DEFAULT_WHITEBOARD_REGION: &str = "cn-hz";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub jwt_secret: String,

    pub whiteboard: WhiteboardConfig,
    pub agora_ai: AgoraAiConfig,
}

/// Endpoint and credentials of the whiteboard service.
#[derive(Clone, Debug)]
pub struct WhiteboardConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub sdk_token: String,
    pub region: String,
}

/// Regional endpoints of the AI conversation service.
#[derive(Clone, Debug)]
pub struct AgoraAiConfig {
    pub server_url_cn: String,
    pub server_url_en: String,
}

impl AgoraAiConfig {
    /// Picks the China-region endpoint for `"zh"` and the default endpoint otherwise.
    pub fn server_url(&self, language: &str) -> &str {
        if language == "zh" {
            &self.server_url_cn
        } else {
            &self.server_url_en
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            jwt_secret: required("JWT_SECRET")?,
            whiteboard: WhiteboardConfig {
                api_url: base_url(
                    "WHITEBOARD_API_URL",
                    optional("WHITEBOARD_API_URL", DEFAULT_WHITEBOARD_API_URL),
                )?,
                sdk_token: required("WHITEBOARD_SDK_TOKEN")?,
                region: optional("WHITEBOARD_REGION", DEFAULT_WHITEBOARD_REGION),
            },
            agora_ai: AgoraAiConfig {
                server_url_cn: base_url(
                    "AGORA_AI_SERVER_URL_CN",
                    required("AGORA_AI_SERVER_URL_CN")?,
                )?,
                server_url_en: base_url(
                    "AGORA_AI_SERVER_URL_EN",
                    required("AGORA_AI_SERVER_URL_EN")?,
                )?,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Checks that `value` is an absolute URL and strips any trailing slash so paths can be appended.
fn base_url(name: &str, value: String) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
        name: name.to_string(),
        value: value.clone(),
        source,
    })?;

    Ok(value.trim_end_matches('/').to_string())
}

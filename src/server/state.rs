//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for the whiteboard and AI services
//! - Endpoints and credentials of those services
//! - Secret for verifying access tokens

use sea_orm::DatabaseConnection;

use crate::server::config::{AgoraAiConfig, Config, WhiteboardConfig};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - configuration values are small strings cloned once per request
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests.
    ///
    /// Configured without redirects so upstream responses are read as sent.
    pub http_client: reqwest::Client,

    /// Whiteboard service endpoint, SDK token and region.
    pub whiteboard: WhiteboardConfig,

    /// Regional endpoints of the AI conversation service.
    pub agora_ai: AgoraAiConfig,

    /// HS256 secret access tokens are verified against.
    pub jwt_secret: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for outbound requests
    /// - `config` - Application configuration supplying endpoints and the token secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            whiteboard: config.whiteboard.clone(),
            agora_ai: config.agora_ai.clone(),
            jwt_secret: config.jwt_secret.clone(),
        }
    }
}

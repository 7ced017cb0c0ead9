//! Canned third-party services for outbound request tests.
//!
//! `FakeUpstream` answers every request with the same response and records what it
//! received, so tests can assert on the path, headers and body the backend sent.

use std::sync::{Arc, Mutex};

use axum::{
    http::{header, HeaderMap, StatusCode, Uri},
    Router,
};

use crate::{error::TestError, server::TestServer};

/// A request captured by [`FakeUpstream`].
#[derive(Clone, Debug)]
pub struct ReceivedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl ReceivedRequest {
    /// Parses the captured body as JSON, yielding `Value::Null` for anything else.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }

    /// Returns a header value as a string if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Local stand-in for a third-party HTTP service.
pub struct FakeUpstream {
    server: TestServer,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl FakeUpstream {
    /// Starts an upstream answering every request with `status` and a JSON `body`.
    pub async fn json(status: StatusCode, body: serde_json::Value) -> Result<Self, TestError> {
        Self::respond(status, "application/json", body.to_string()).await
    }

    /// Starts an upstream answering every request with the given status, content type and body.
    pub async fn respond(
        status: StatusCode,
        content_type: &str,
        body: impl Into<String>,
    ) -> Result<Self, TestError> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let content_type = content_type.to_string();
        let body = body.into();

        let recorder = received.clone();
        let router = Router::new().fallback(
            move |uri: Uri, headers: HeaderMap, request_body: String| {
                let recorder = recorder.clone();
                let content_type = content_type.clone();
                let body = body.clone();
                async move {
                    if let Ok(mut received) = recorder.lock() {
                        received.push(ReceivedRequest {
                            path: uri.path().to_string(),
                            headers,
                            body: request_body,
                        });
                    }
                    (status, [(header::CONTENT_TYPE, content_type)], body)
                }
            },
        );

        let server = TestServer::serve(router).await?;

        Ok(Self { server, received })
    }

    /// Base URL of the fake service without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.server.base_url
    }

    /// Requests received so far, oldest first.
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

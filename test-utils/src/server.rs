//! Serving routers on an ephemeral local port.

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// An axum router served on `127.0.0.1` for the lifetime of the value.
///
/// The serving task is aborted on drop so each test tears down its own listener.
pub struct TestServer {
    /// Base URL of the server without a trailing slash, e.g. `http://127.0.0.1:54321`.
    pub base_url: String,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Binds an ephemeral port and starts serving `router` in a background task.
    ///
    /// # Returns
    /// - `Ok(TestServer)` - Server accepting connections at `base_url`
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn serve(router: Router) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            task,
        })
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

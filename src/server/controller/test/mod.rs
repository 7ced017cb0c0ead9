use axum::http::StatusCode;
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder, context::TestContext, factory, server::TestServer,
    upstream::FakeUpstream,
};

use crate::server::{
    config::{AgoraAiConfig, WhiteboardConfig},
    router,
    state::AppState,
    util::jwt,
};


const SECRET: &str = "controller-test-secret";

/// The real router served over HTTP, backed by an in-memory database and fake upstreams.
struct TestApp {
    server: TestServer,
    client: reqwest::Client,
    db: DatabaseConnection,
    whiteboard: FakeUpstream,
    ai_cn: FakeUpstream,
    ai_en: FakeUpstream,
    _context: TestContext,
}

impl TestApp {
    /// Serves the app with upstreams that accept every request.
    async fn new() -> Self {
        Self::with_upstreams(
            FakeUpstream::json(StatusCode::OK, json!({ "uuid": "wb-room" }))
                .await
                .unwrap(),
            FakeUpstream::json(StatusCode::OK, json!({ "region": "cn" }))
                .await
                .unwrap(),
            FakeUpstream::json(StatusCode::OK, json!({ "region": "en" }))
                .await
                .unwrap(),
        )
        .await
    }

    async fn with_upstreams(
        whiteboard: FakeUpstream,
        ai_cn: FakeUpstream,
        ai_en: FakeUpstream,
    ) -> Self {
        let context = TestBuilder::new()
            .with_room_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();

        let state = AppState {
            db: db.clone(),
            http_client: reqwest::Client::new(),
            whiteboard: WhiteboardConfig {
                api_url: whiteboard.base_url().to_string(),
                sdk_token: "sdk-token".to_string(),
                region: "cn-hz".to_string(),
            },
            agora_ai: AgoraAiConfig {
                server_url_cn: ai_cn.base_url().to_string(),
                server_url_en: ai_en.base_url().to_string(),
            },
            jwt_secret: SECRET.to_string(),
        };

        let server = TestServer::serve(router::router().with_state(state))
            .await
            .unwrap();

        Self {
            server,
            client: reqwest::Client::new(),
            db,
            whiteboard,
            ai_cn,
            ai_en,
            _context: context,
        }
    }

    /// Issues a token for a freshly created user and returns both.
    async fn sign_in(&self) -> (entity::user::Model, String) {
        let user = factory::create_user(&self.db).await.unwrap();
        let token = jwt::sign(&user.user_uuid, "Github", SECRET).unwrap();
        (user, token)
    }

    /// POSTs `body` to `path` and returns the status and JSON body.
    async fn post(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut request = self.client.post(self.server.url(path)).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.unwrap();
        let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
        let body = response.json::<Value>().await.unwrap();

        (status, body)
    }
}

/// Millisecond timestamp `minutes` from now.
fn millis_from_now(minutes: i64) -> i64 {
    (Utc::now() + Duration::minutes(minutes)).timestamp_millis()
}

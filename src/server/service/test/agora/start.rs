use super::*;

/// Tests the regional routing of the relay.
///
/// `"zh"` must reach the China-region service and anything else the default region.
///
/// Expected: each upstream receives exactly the requests for its region
#[tokio::test]
async fn routes_by_language() {
    let cn = FakeUpstream::json(StatusCode::OK, json!({ "region": "cn" }))
        .await
        .unwrap();
    let en = FakeUpstream::json(StatusCode::OK, json!({ "region": "en" }))
        .await
        .unwrap();
    let config = AgoraAiConfig {
        server_url_cn: cn.base_url().to_string(),
        server_url_en: en.base_url().to_string(),
    };
    let http_client = reqwest::Client::new();
    let service = AgoraAiService::new(&http_client, &config);

    let zh = service.start("zh", "req-1", "channel-1").await.unwrap();
    let other = service.start("fr", "req-2", "channel-2").await.unwrap();

    assert_eq!(zh, json!({ "region": "cn" }));
    assert_eq!(other, json!({ "region": "en" }));

    let cn_received = cn.received();
    assert_eq!(cn_received.len(), 1);
    assert_eq!(cn_received[0].path, "/start");
    assert_eq!(
        cn_received[0].json(),
        json!({ "request_id": "req-1", "channel_name": "channel-1" })
    );
    assert_eq!(
        cn_received[0].header("content-type"),
        Some("application/json")
    );

    let en_received = en.received();
    assert_eq!(en_received.len(), 1);
    assert_eq!(
        en_received[0].json(),
        json!({ "request_id": "req-2", "channel_name": "channel-2" })
    );
}

/// Tests relaying a body that is not JSON.
///
/// Expected: Ok(Value::String) holding the raw body
#[tokio::test]
async fn relays_plain_text_as_string() {
    let upstream = FakeUpstream::respond(StatusCode::OK, "text/plain", "agent started")
        .await
        .unwrap();
    let config = AgoraAiConfig {
        server_url_cn: upstream.base_url().to_string(),
        server_url_en: upstream.base_url().to_string(),
    };
    let http_client = reqwest::Client::new();

    let service = AgoraAiService::new(&http_client, &config);
    let body = service.start("en", "req", "channel").await.unwrap();

    assert_eq!(body, json!("agent started"));
}

/// Tests an error status from the AI service.
///
/// Expected: Err(AppError::ReqwestErr)
#[tokio::test]
async fn fails_on_error_status() {
    let upstream = FakeUpstream::json(StatusCode::BAD_GATEWAY, json!({ "error": "down" }))
        .await
        .unwrap();
    let config = AgoraAiConfig {
        server_url_cn: upstream.base_url().to_string(),
        server_url_en: upstream.base_url().to_string(),
    };
    let http_client = reqwest::Client::new();

    let service = AgoraAiService::new(&http_client, &config);
    let result = service.start("zh", "req", "channel").await;

    assert!(matches!(result, Err(AppError::ReqwestErr(_))));
}

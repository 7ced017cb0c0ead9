use super::*;

/// Tests creating a whiteboard room.
///
/// Verifies the request path, credentials headers and body sent to the service.
///
/// Expected: Ok(uuid) from the response body
#[tokio::test]
async fn returns_whiteboard_room_uuid() {
    let upstream = FakeUpstream::json(StatusCode::CREATED, json!({ "uuid": "wb-123" }))
        .await
        .unwrap();
    let config = config(&upstream);
    let http_client = reqwest::Client::new();

    let service = WhiteboardService::new(&http_client, &config);
    let uuid = service.create_room().await.unwrap();

    assert_eq!(uuid, "wb-123");

    let received = upstream.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].path, "/rooms");
    assert_eq!(received[0].header("token"), Some("sdk-token"));
    assert_eq!(received[0].header("region"), Some("us-sv"));
    assert_eq!(received[0].json(), json!({ "isRecord": true, "limit": 0 }));
}

/// Tests a successful response without a room uuid.
///
/// Expected: Err(AppError::UpstreamErr(MissingWhiteboardRoomUuid))
#[tokio::test]
async fn fails_without_uuid() {
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "code": 0 }))
        .await
        .unwrap();
    let config = config(&upstream);
    let http_client = reqwest::Client::new();

    let service = WhiteboardService::new(&http_client, &config);
    let result = service.create_room().await;

    assert!(matches!(
        result,
        Err(AppError::UpstreamErr(UpstreamError::MissingWhiteboardRoomUuid { .. }))
    ));
}

/// Tests an error status from the whiteboard service.
///
/// Expected: Err(AppError::ReqwestErr)
#[tokio::test]
async fn fails_on_error_status() {
    let upstream = FakeUpstream::json(
        StatusCode::UNAUTHORIZED,
        json!({ "uuid": "wb-ignored" }),
    )
    .await
    .unwrap();
    let config = config(&upstream);
    let http_client = reqwest::Client::new();

    let service = WhiteboardService::new(&http_client, &config);
    let result = service.create_room().await;

    assert!(matches!(result, Err(AppError::ReqwestErr(_))));
}

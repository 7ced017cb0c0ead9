use super::*;

/// Tests reading back a created room as its owner.
///
/// Expected: Ok(OrdinaryRoomInfo) with the owner's name and the preloaded documents
#[tokio::test]
async fn returns_room_for_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "uuid": "wb-5" }))
        .await
        .unwrap();
    let config = whiteboard_config(&upstream);
    let http_client = reqwest::Client::new();

    let owner = factory::user::UserFactory::new(db)
        .user_name("Teacher")
        .build()
        .await?;
    let mut request = param(&owner.user_uuid);
    request.docs = vec![PreloadDoc {
        doc_uuid: "doc-a".to_string(),
        doc_type: DocType::Dynamic,
    }];

    let service = RoomService::new(db, WhiteboardService::new(&http_client, &config));
    let room_uuid = service.create_ordinary(request).await?;

    let info = service
        .get_ordinary_info(&owner.user_uuid, &room_uuid)
        .await?;

    assert_eq!(info.room.owner_uuid, owner.user_uuid);
    assert_eq!(info.room.title, "Chemistry");
    assert_eq!(info.room.room_type, RoomType::SmallClass);
    assert_eq!(info.room.room_status, RoomStatus::Idle);
    assert_eq!(info.owner_user_name, "Teacher");
    assert_eq!(info.docs.len(), 1);
    assert_eq!(info.docs[0].doc_uuid, "doc-a");
    assert_eq!(info.docs[0].doc_type, DocType::Dynamic);
    assert!(info.docs[0].is_preload);

    Ok(())
}

/// Tests that a user outside the room cannot read it.
///
/// Expected: Err(AppError::RoomNotFound)
#[tokio::test]
async fn hides_room_from_non_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upstream = FakeUpstream::json(StatusCode::OK, json!({ "uuid": "wb-6" }))
        .await
        .unwrap();
    let config = whiteboard_config(&upstream);
    let http_client = reqwest::Client::new();

    let (owner, room) = factory::helpers::create_room_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;

    let service = RoomService::new(db, WhiteboardService::new(&http_client, &config));

    // The factory room has no participants, so even its owner is an outsider here.
    let as_owner = service
        .get_ordinary_info(&owner.user_uuid, &room.room_uuid)
        .await;
    let as_outsider = service
        .get_ordinary_info(&outsider.user_uuid, &room.room_uuid)
        .await;
    let missing = service
        .get_ordinary_info(&outsider.user_uuid, "missing-room")
        .await;

    assert!(matches!(as_owner, Err(AppError::RoomNotFound(_))));
    assert!(matches!(as_outsider, Err(AppError::RoomNotFound(_))));
    assert!(matches!(missing, Err(AppError::RoomNotFound(_))));

    Ok(())
}

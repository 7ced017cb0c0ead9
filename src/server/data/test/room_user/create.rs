use super::*;

/// Tests adding a participant to an existing room.
///
/// Expected: Ok(Model) with the given rtc uid
#[tokio::test]
async fn creates_room_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_room_with_owner(db).await?;

    let repo = RoomUserRepository::new(db);
    let room_user = repo
        .create(CreateRoomUserParam {
            room_uuid: room.room_uuid.clone(),
            user_uuid: user.user_uuid.clone(),
            rtc_uid: "012345".to_string(),
        })
        .await?;

    assert_eq!(room_user.room_uuid, room.room_uuid);
    assert_eq!(room_user.user_uuid, user.user_uuid);
    assert_eq!(room_user.rtc_uid, "012345");
    assert!(!room_user.is_delete);

    Ok(())
}

/// Tests that a participant cannot reference a room that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RoomUserRepository::new(db);
    let result = repo
        .create(CreateRoomUserParam {
            room_uuid: "missing-room".to_string(),
            user_uuid: user.user_uuid,
            rtc_uid: "123456".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

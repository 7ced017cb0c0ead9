use super::*;

/// Tests membership checks for participants and outsiders.
///
/// Expected: true for the participant, false for another user
#[tokio::test]
async fn checks_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_room_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;

    let repo = RoomUserRepository::new(db);
    repo.create(CreateRoomUserParam {
        room_uuid: room.room_uuid.clone(),
        user_uuid: user.user_uuid.clone(),
        rtc_uid: "654321".to_string(),
    })
    .await?;

    assert!(repo.is_member(&room.room_uuid, &user.user_uuid).await?);
    assert!(!repo.is_member(&room.room_uuid, &outsider.user_uuid).await?);
    assert!(!repo.is_member("missing-room", &user.user_uuid).await?);

    Ok(())
}

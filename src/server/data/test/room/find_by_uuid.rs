use super::*;

/// Tests finding an existing room.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_room_with_owner(db).await?;

    let repo = RoomRepository::new(db);
    let found = repo.find_by_uuid(&room.room_uuid).await?;

    let found = found.expect("room must exist");
    assert_eq!(found.id, room.id);
    assert_eq!(found.owner_uuid, user.user_uuid);

    Ok(())
}

/// Tests that unknown and soft-deleted rooms are not returned.
///
/// Expected: Ok(None) for both
#[tokio::test]
async fn returns_none_for_missing_or_deleted_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let deleted = factory::room::RoomFactory::new(db, &user.user_uuid)
        .deleted()
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo.find_by_uuid("missing-room").await?.is_none());
    assert!(repo.find_by_uuid(&deleted.room_uuid).await?.is_none());

    Ok(())
}

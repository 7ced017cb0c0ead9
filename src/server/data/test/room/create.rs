use super::*;

/// Tests inserting a room.
///
/// Verifies enums are stored by name and the periodic reference is empty.
///
/// Expected: Ok(Model) with the requested values
#[tokio::test]
async fn creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let param = create_param("room-a", "owner-a");
    let begin_time = param.begin_time;

    let room = repo.create(param).await?;

    assert_eq!(room.room_uuid, "room-a");
    assert_eq!(room.owner_uuid, "owner-a");
    assert_eq!(room.room_type, "BigClass");
    assert_eq!(room.room_status, "Idle");
    assert_eq!(room.whiteboard_room_uuid, "whiteboard-1");
    assert!(room.periodic_uuid.is_empty());
    assert!(!room.is_delete);
    assert_eq!(room.end_time - room.begin_time, Duration::hours(1));
    assert_eq!(room.begin_time, begin_time);

    Ok(())
}

/// Tests that room uuids are unique.
///
/// Expected: Err(DbErr) on the second insert and a single stored row
#[tokio::test]
async fn rejects_duplicate_room_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    repo.create(create_param("room-dup", "owner-a")).await?;

    let result = repo.create(create_param("room-dup", "owner-b")).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Room::find().count(db).await?, 1);

    Ok(())
}

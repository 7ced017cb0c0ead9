use super::*;

/// Tests listing the documents of one room.
///
/// Expected: only the documents of the requested room, in insertion order
#[tokio::test]
async fn gets_documents_of_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, room) = factory::helpers::create_room_with_owner(db).await?;
    let other = factory::create_room(db, &user.user_uuid).await?;

    let repo = RoomDocRepository::new(db);
    repo.create_many(vec![
        doc_param("doc-1", &room.room_uuid, DocType::Static),
        doc_param("doc-2", &room.room_uuid, DocType::Dynamic),
        doc_param("doc-3", &other.room_uuid, DocType::Static),
    ])
    .await?;

    let docs = repo.get_by_room(&room.room_uuid).await?;

    let uuids: Vec<_> = docs.iter().map(|doc| doc.doc_uuid.as_str()).collect();
    assert_eq!(uuids, vec!["doc-1", "doc-2"]);

    Ok(())
}

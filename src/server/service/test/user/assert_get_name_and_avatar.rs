use super::*;
use crate::model::api::ErrorCode;

/// Tests the asserting lookup of an existing user.
///
/// Expected: Ok(NameAndAvatar)
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("Bob")
        .build()
        .await?;

    let service = UserService::new(db);
    let found = service.assert_get_name_and_avatar(&user.user_uuid).await?;

    assert_eq!(found.user_name, "Bob");
    assert_eq!(found.avatar_url, user.avatar_url);

    Ok(())
}

/// Tests that a missing user becomes a typed not-found error.
///
/// Expected: Err(AppError::UserNotFound) with code UserNotFound
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).deleted().build().await?;

    let service = UserService::new(db);
    let result = service.assert_get_name_and_avatar(&user.user_uuid).await;

    let err = result.expect_err("deleted user must not be found");
    assert!(matches!(err, AppError::UserNotFound(ref uuid) if *uuid == user.user_uuid));
    assert_eq!(err.error_code(), ErrorCode::UserNotFound);

    Ok(())
}

//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a room owned by that user.
///
/// # Returns
/// - `Ok((user, room))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::room::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let room = crate::factory::room::create_room(db, &user.user_uuid).await?;

    Ok((user, room))
}

//! User data repository for database operations.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::server::model::user::NameAndAvatar;

/// Repository providing read access to user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the name and avatar of a live user.
    ///
    /// Only the two display columns are selected. Soft-deleted users are treated as absent.
    ///
    /// # Arguments
    /// - `user_uuid` - Unique identifier of the user
    ///
    /// # Returns
    /// - `Ok(Some(NameAndAvatar))` - User found
    /// - `Ok(None)` - No live user with that uuid
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_name_and_avatar(
        &self,
        user_uuid: &str,
    ) -> Result<Option<NameAndAvatar>, DbErr> {
        let row = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::UserName)
            .column(entity::user::Column::AvatarUrl)
            .filter(entity::user::Column::UserUuid.eq(user_uuid))
            .filter(entity::user::Column::IsDelete.eq(false))
            .into_tuple::<(String, String)>()
            .one(self.db)
            .await?;

        Ok(row.map(|(user_name, avatar_url)| NameAndAvatar {
            user_name,
            avatar_url,
        }))
    }
}

//! User service for business logic.
//!
//! This module provides the `UserService` for reading the display identity of users.
//! It wraps the user repository and turns a missing user into a typed not-found error
//! for callers that require the user to exist.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::NameAndAvatar};

/// Service providing business logic for user lookups.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the name and avatar of a user.
    ///
    /// # Arguments
    /// - `user_uuid` - Unique identifier of the user
    ///
    /// # Returns
    /// - `Ok(Some(NameAndAvatar))` - User found
    /// - `Ok(None)` - No live user with that uuid
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn name_and_avatar(&self, user_uuid: &str) -> Result<Option<NameAndAvatar>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_name_and_avatar(user_uuid).await?;
        Ok(user)
    }

    /// Retrieves the name and avatar of a user that must exist.
    ///
    /// # Arguments
    /// - `user_uuid` - Unique identifier of the user
    ///
    /// # Returns
    /// - `Ok(NameAndAvatar)` - User found
    /// - `Err(AppError::UserNotFound)` - No live user with that uuid
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn assert_get_name_and_avatar(
        &self,
        user_uuid: &str,
    ) -> Result<NameAndAvatar, AppError> {
        self.name_and_avatar(user_uuid)
            .await?
            .ok_or_else(|| AppError::UserNotFound(user_uuid.to_string()))
    }
}

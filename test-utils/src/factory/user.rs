//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .user_uuid("0b4f2c4e-2b4a-4d8f-9a57-1f1e0e6d7c11")
///     .user_name("Alice")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_uuid: String,
    user_name: String,
    avatar_url: String,
    is_delete: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_uuid: `"user-{id}"` where id is auto-incremented
    /// - user_name: `"User {id}"`
    /// - avatar_url: `"https://avatar.test/{id}.png"`
    /// - is_delete: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_uuid: format!("user-{}", id),
            user_name: format!("User {}", id),
            avatar_url: format!("https://avatar.test/{}.png", id),
            is_delete: false,
        }
    }

    pub fn user_uuid(mut self, user_uuid: impl Into<String>) -> Self {
        self.user_uuid = user_uuid.into();
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    /// Marks the user as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.is_delete = true;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            user_uuid: ActiveValue::Set(self.user_uuid),
            user_name: ActiveValue::Set(self.user_name),
            user_password: ActiveValue::Set(String::new()),
            avatar_url: ActiveValue::Set(self.avatar_url),
            gender: ActiveValue::Set("none".to_string()),
            is_delete: ActiveValue::Set(self.is_delete),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// The room defaults to a one-to-one, idle room beginning now and lasting one hour.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_uuid: String,
    owner_uuid: String,
    title: String,
    room_type: String,
    begin_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    is_delete: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory owned by `owner_uuid`.
    ///
    /// Defaults:
    /// - room_uuid: `"room-{id}"` where id is auto-incremented
    /// - title: `"Room {id}"`
    /// - room_type: `"OneToOne"`
    /// - begin_time: now, end_time: now + 1 hour
    pub fn new(db: &'a DatabaseConnection, owner_uuid: impl Into<String>) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            room_uuid: format!("room-{}", id),
            owner_uuid: owner_uuid.into(),
            title: format!("Room {}", id),
            room_type: "OneToOne".to_string(),
            begin_time: now,
            end_time: now + Duration::hours(1),
            is_delete: false,
        }
    }

    pub fn room_uuid(mut self, room_uuid: impl Into<String>) -> Self {
        self.room_uuid = room_uuid.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Marks the room as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.is_delete = true;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            room_uuid: ActiveValue::Set(self.room_uuid),
            periodic_uuid: ActiveValue::Set(String::new()),
            owner_uuid: ActiveValue::Set(self.owner_uuid),
            title: ActiveValue::Set(self.title),
            room_type: ActiveValue::Set(self.room_type),
            room_status: ActiveValue::Set("Idle".to_string()),
            whiteboard_room_uuid: ActiveValue::Set(format!("whiteboard-{}", next_id())),
            begin_time: ActiveValue::Set(self.begin_time),
            end_time: ActiveValue::Set(self.end_time),
            is_delete: ActiveValue::Set(self.is_delete),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values owned by `owner_uuid`.
pub async fn create_room(
    db: &DatabaseConnection,
    owner_uuid: &str,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, owner_uuid).build().await
}

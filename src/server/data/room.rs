//! Room data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::room::CreateRoomParam;

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new non-recurring room.
    ///
    /// The periodic reference is stored empty.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created room
    /// - `Err(DbErr)` - Database error, e.g. duplicate room uuid
    pub async fn create(&self, param: CreateRoomParam) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();

        entity::room::ActiveModel {
            room_uuid: ActiveValue::Set(param.room_uuid),
            periodic_uuid: ActiveValue::Set(String::new()),
            owner_uuid: ActiveValue::Set(param.owner_uuid),
            title: ActiveValue::Set(param.title),
            room_type: ActiveValue::Set(param.room_type.as_str().to_string()),
            room_status: ActiveValue::Set(param.room_status.as_str().to_string()),
            whiteboard_room_uuid: ActiveValue::Set(param.whiteboard_room_uuid),
            begin_time: ActiveValue::Set(param.begin_time),
            end_time: ActiveValue::Set(param.end_time),
            is_delete: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a live room by its uuid.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Room found
    /// - `Ok(None)` - No room or the room is soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_uuid(&self, room_uuid: &str) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomUuid.eq(room_uuid))
            .filter(entity::room::Column::IsDelete.eq(false))
            .one(self.db)
            .await
    }
}

//! Room participant repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::room::CreateRoomUserParam;

pub struct RoomUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a room with its RTC uid.
    pub async fn create(
        &self,
        param: CreateRoomUserParam,
    ) -> Result<entity::room_user::Model, DbErr> {
        let now = Utc::now();

        entity::room_user::ActiveModel {
            room_uuid: ActiveValue::Set(param.room_uuid),
            user_uuid: ActiveValue::Set(param.user_uuid),
            rtc_uid: ActiveValue::Set(param.rtc_uid),
            is_delete: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Whether `user_uuid` is a live participant of `room_uuid`.
    pub async fn is_member(&self, room_uuid: &str, user_uuid: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RoomUser::find()
            .filter(entity::room_user::Column::RoomUuid.eq(room_uuid))
            .filter(entity::room_user::Column::UserUuid.eq(user_uuid))
            .filter(entity::room_user::Column::IsDelete.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

//! Room document repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::CreateRoomDocParam;

pub struct RoomDocRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomDocRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts all documents in a single statement.
    ///
    /// Does nothing when `params` is empty.
    ///
    /// # Returns
    /// - `Ok(())` - All documents inserted
    /// - `Err(DbErr)` - Database error; no document from this call is inserted
    pub async fn create_many(&self, params: Vec<CreateRoomDocParam>) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = params.into_iter().map(|param| entity::room_doc::ActiveModel {
            doc_uuid: ActiveValue::Set(param.doc_uuid),
            room_uuid: ActiveValue::Set(param.room_uuid),
            periodic_uuid: ActiveValue::Set(String::new()),
            doc_type: ActiveValue::Set(param.doc_type.as_str().to_string()),
            is_preload: ActiveValue::Set(param.is_preload),
            is_delete: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::RoomDoc::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the live documents of a room in insertion order.
    pub async fn get_by_room(
        &self,
        room_uuid: &str,
    ) -> Result<Vec<entity::room_doc::Model>, DbErr> {
        entity::prelude::RoomDoc::find()
            .filter(entity::room_doc::Column::RoomUuid.eq(room_uuid))
            .filter(entity::room_doc::Column::IsDelete.eq(false))
            .order_by_asc(entity::room_doc::Column::Id)
            .all(self.db)
            .await
    }
}

//! Room service for business logic.
//!
//! This module provides the `RoomService` for scheduling ordinary rooms and reading them
//! back. Creation checks the requested time window, creates the backing whiteboard room,
//! and then writes the room, its owner's participation and its preloaded documents inside
//! a single database transaction.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::room::RoomStatus,
    server::{
        data::{room::RoomRepository, room_doc::RoomDocRepository, room_user::RoomUserRepository},
        error::AppError,
        model::room::{
            CreateOrdinaryRoomParam, CreateRoomDocParam, CreateRoomParam, CreateRoomUserParam,
            OrdinaryRoomInfo, Room, RoomDoc,
        },
        service::{user::UserService, whiteboard::WhiteboardService},
        util::{random, time},
    },
};

/// Service providing business logic for ordinary rooms.
pub struct RoomService<'a> {
    pub db: &'a DatabaseConnection,
    pub whiteboard: WhiteboardService<'a>,
}

impl<'a> RoomService<'a> {
    /// Creates a new RoomService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `whiteboard` - Client used to create the whiteboard room backing each new room
    pub fn new(db: &'a DatabaseConnection, whiteboard: WhiteboardService<'a>) -> Self {
        Self { db, whiteboard }
    }

    /// Creates an ordinary room owned by `param.owner_uuid`.
    ///
    /// The time window is checked against the current time first. Once it passes, any
    /// failure of the whiteboard call or of the database writes is logged and reported as
    /// `CurrentProcessFailed`; the transaction is rolled back so no partial room remains.
    ///
    /// # Arguments
    /// - `param` - Owner, title, type, time window and documents of the room
    ///
    /// # Returns
    /// - `Ok(String)` - uuid of the new room
    /// - `Err(AppError::ParamsCheckFailed)` - Time window rejected
    /// - `Err(AppError::CurrentProcessFailed)` - Whiteboard call or database write failed
    pub async fn create_ordinary(&self, param: CreateOrdinaryRoomParam) -> Result<String, AppError> {
        let end_time = check_time_window(param.begin_time, param.end_time, Utc::now())?;

        self.create_room(param, end_time).await.map_err(|err| {
            tracing::error!(error = ?err, "request failed");
            AppError::CurrentProcessFailed
        })
    }

    async fn create_room(
        &self,
        param: CreateOrdinaryRoomParam,
        end_time: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let room_uuid = Uuid::new_v4().to_string();
        let whiteboard_room_uuid = self.whiteboard.create_room().await?;
        let rtc_uid = random::rtc_uid();

        let docs = param
            .docs
            .into_iter()
            .map(|doc| CreateRoomDocParam {
                doc_uuid: doc.doc_uuid,
                room_uuid: room_uuid.clone(),
                doc_type: doc.doc_type,
                is_preload: true,
            })
            .collect();

        let txn = self.db.begin().await?;

        RoomRepository::new(&txn)
            .create(CreateRoomParam {
                room_uuid: room_uuid.clone(),
                owner_uuid: param.owner_uuid.clone(),
                title: param.title,
                room_type: param.room_type,
                room_status: RoomStatus::Idle,
                whiteboard_room_uuid,
                begin_time: param.begin_time,
                end_time,
            })
            .await?;

        RoomUserRepository::new(&txn)
            .create(CreateRoomUserParam {
                room_uuid: room_uuid.clone(),
                user_uuid: param.owner_uuid.clone(),
                rtc_uid,
            })
            .await?;

        RoomDocRepository::new(&txn).create_many(docs).await?;

        txn.commit().await?;

        tracing::info!(room_uuid = %room_uuid, owner_uuid = %param.owner_uuid, "created ordinary room");

        Ok(room_uuid)
    }

    /// Reads an ordinary room for one of its participants.
    ///
    /// # Arguments
    /// - `user_uuid` - Caller; must be a participant of the room
    /// - `room_uuid` - Room to read
    ///
    /// # Returns
    /// - `Ok(OrdinaryRoomInfo)` - Room with its owner's name and documents
    /// - `Err(AppError::RoomNotFound)` - No such room or the caller is not a participant
    /// - `Err(AppError::UserNotFound)` - The room's owner no longer exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_ordinary_info(
        &self,
        user_uuid: &str,
        room_uuid: &str,
    ) -> Result<OrdinaryRoomInfo, AppError> {
        let is_member = RoomUserRepository::new(self.db)
            .is_member(room_uuid, user_uuid)
            .await?;
        if !is_member {
            return Err(AppError::RoomNotFound(room_uuid.to_string()));
        }

        let room = RoomRepository::new(self.db)
            .find_by_uuid(room_uuid)
            .await?
            .ok_or_else(|| AppError::RoomNotFound(room_uuid.to_string()))?;
        let room = Room::from_entity(room)?;

        let owner = UserService::new(self.db)
            .assert_get_name_and_avatar(&room.owner_uuid)
            .await?;

        let docs = RoomDocRepository::new(self.db)
            .get_by_room(room_uuid)
            .await?
            .into_iter()
            .map(RoomDoc::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrdinaryRoomInfo {
            room,
            owner_user_name: owner.user_name,
            docs,
        })
    }
}

/// Checks the requested time window against `now` and resolves the end time.
///
/// Without an explicit end the room lasts one hour.
fn check_time_window(
    begin_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    if time::begin_time_exceeds_redundancy_one_minute(begin_time, now) {
        return Err(AppError::ParamsCheckFailed(
            "beginTime is more than one minute in the past".to_string(),
        ));
    }

    let Some(end_time) = end_time else {
        return Ok(begin_time + Duration::hours(1));
    };

    if time::begin_time_after_end_time(begin_time, end_time) {
        return Err(AppError::ParamsCheckFailed(
            "beginTime is after endTime".to_string(),
        ));
    }

    if time::interval_less_than_fifteen_minutes(begin_time, end_time) {
        return Err(AppError::ParamsCheckFailed(
            "room is shorter than fifteen minutes".to_string(),
        ));
    }

    Ok(end_time)
}

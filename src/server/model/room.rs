//! Room domain models and parameters.
//!
//! Provides the parameters for creating an ordinary room with its owner and preloaded
//! documents, and the domain models read back for the room info endpoint. Enum columns
//! are stored as strings and parsed here at the repository boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::room::{
        CreateOrdinaryRoomDto, DocType, OrdinaryRoomInfoDto, RoomInfoDocDto, RoomInfoDto,
        RoomStatus, RoomType,
    },
    server::{
        error::{internal::InternalError, AppError},
        util::time::from_unix_millis,
    },
};

/// A document to attach to a room when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct PreloadDoc {
    pub doc_uuid: String,
    pub doc_type: DocType,
}

/// Parameters for creating an ordinary room, as requested by its owner.
#[derive(Debug, Clone)]
pub struct CreateOrdinaryRoomParam {
    /// User creating the room; becomes owner and first participant.
    pub owner_uuid: String,
    pub title: String,
    pub room_type: RoomType,
    pub begin_time: DateTime<Utc>,
    /// End of the room; `None` means one hour after `begin_time`.
    pub end_time: Option<DateTime<Utc>>,
    pub docs: Vec<PreloadDoc>,
}

impl CreateOrdinaryRoomParam {
    /// Converts the request DTO into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateOrdinaryRoomParam)` - Converted parameters
    /// - `Err(AppError::ParamsCheckFailed)` - A timestamp is outside the representable range
    pub fn from_dto(owner_uuid: String, dto: CreateOrdinaryRoomDto) -> Result<Self, AppError> {
        let begin_time = from_unix_millis(dto.begin_time).ok_or_else(|| {
            AppError::ParamsCheckFailed(format!("beginTime out of range: {}", dto.begin_time))
        })?;

        let end_time = dto
            .end_time
            .map(|end_time| {
                from_unix_millis(end_time).ok_or_else(|| {
                    AppError::ParamsCheckFailed(format!("endTime out of range: {}", end_time))
                })
            })
            .transpose()?;

        let docs = dto
            .docs
            .unwrap_or_default()
            .into_iter()
            .map(|doc| PreloadDoc {
                doc_uuid: doc.uuid,
                doc_type: doc.doc_type,
            })
            .collect();

        Ok(Self {
            owner_uuid,
            title: dto.title,
            room_type: dto.room_type,
            begin_time,
            end_time,
            docs,
        })
    }
}

/// Row values for a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    pub room_uuid: String,
    pub owner_uuid: String,
    pub title: String,
    pub room_type: RoomType,
    pub room_status: RoomStatus,
    pub whiteboard_room_uuid: String,
    pub begin_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Row values for a room participant.
#[derive(Debug, Clone)]
pub struct CreateRoomUserParam {
    pub room_uuid: String,
    pub user_uuid: String,
    pub rtc_uid: String,
}

/// Row values for a document attached to a room.
#[derive(Debug, Clone)]
pub struct CreateRoomDocParam {
    pub doc_uuid: String,
    pub room_uuid: String,
    pub doc_type: DocType,
    pub is_preload: bool,
}

/// A scheduled room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub owner_uuid: String,
    pub title: String,
    pub room_type: RoomType,
    pub room_status: RoomStatus,
    pub begin_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted room
    /// - `Err(AppError::InternalErr(UnknownVariant))` - Stored type or status is not recognised
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, AppError> {
        let room_type = RoomType::parse(&entity.room_type).ok_or(InternalError::UnknownVariant {
            column: "rooms.room_type",
            value: entity.room_type.clone(),
        })?;
        let room_status =
            RoomStatus::parse(&entity.room_status).ok_or(InternalError::UnknownVariant {
                column: "rooms.room_status",
                value: entity.room_status.clone(),
            })?;

        Ok(Self {
            owner_uuid: entity.owner_uuid,
            title: entity.title,
            room_type,
            room_status,
            begin_time: entity.begin_time,
            end_time: entity.end_time,
        })
    }
}

/// A document attached to a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDoc {
    pub doc_uuid: String,
    pub doc_type: DocType,
    pub is_preload: bool,
}

impl RoomDoc {
    pub fn from_entity(entity: entity::room_doc::Model) -> Result<Self, AppError> {
        let doc_type = DocType::parse(&entity.doc_type).ok_or(InternalError::UnknownVariant {
            column: "room_docs.doc_type",
            value: entity.doc_type.clone(),
        })?;

        Ok(Self {
            doc_uuid: entity.doc_uuid,
            doc_type,
            is_preload: entity.is_preload,
        })
    }

    pub fn into_dto(self) -> RoomInfoDocDto {
        RoomInfoDocDto {
            doc_type: self.doc_type,
            doc_uuid: self.doc_uuid,
            is_preload: self.is_preload,
        }
    }
}

/// An ordinary room together with its owner's name and attached documents.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinaryRoomInfo {
    pub room: Room,
    pub owner_user_name: String,
    pub docs: Vec<RoomDoc>,
}

impl OrdinaryRoomInfo {
    /// Converts to the DTO returned by the room info endpoint. Times become Unix milliseconds.
    pub fn into_dto(self) -> OrdinaryRoomInfoDto {
        OrdinaryRoomInfoDto {
            room_info: RoomInfoDto {
                title: self.room.title,
                begin_time: self.room.begin_time.timestamp_millis(),
                end_time: self.room.end_time.timestamp_millis(),
                room_type: self.room.room_type,
                room_status: self.room.room_status,
                owner_uuid: self.room.owner_uuid,
                owner_user_name: self.owner_user_name,
            },
            docs: self.docs.into_iter().map(RoomDoc::into_dto).collect(),
        }
    }
}

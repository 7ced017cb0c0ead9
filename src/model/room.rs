use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Class size of a room.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum RoomType {
    OneToOne,
    SmallClass,
    BigClass,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOne",
            Self::SmallClass => "SmallClass",
            Self::BigClass => "BigClass",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OneToOne" => Some(Self::OneToOne),
            "SmallClass" => Some(Self::SmallClass),
            "BigClass" => Some(Self::BigClass),
            _ => None,
        }
    }
}

/// Lifecycle state of a room.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum RoomStatus {
    Idle,
    Started,
    Paused,
    Stopped,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Started => "Started",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Idle" => Some(Self::Idle),
            "Started" => Some(Self::Started),
            "Paused" => Some(Self::Paused),
            "Stopped" => Some(Self::Stopped),
            _ => None,
        }
    }
}

/// Rendering mode of a courseware document.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub enum DocType {
    Dynamic,
    Static,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic",
            Self::Static => "Static",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Dynamic" => Some(Self::Dynamic),
            "Static" => Some(Self::Static),
            _ => None,
        }
    }
}

/// Document attached to a room at creation time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RoomDocDto {
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub uuid: String,
}

/// Request body for creating an ordinary room. Timestamps are Unix milliseconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrdinaryRoomDto {
    pub title: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub begin_time: i64,
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub docs: Option<Vec<RoomDocDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateOrdinaryRoomResponseDto {
    #[serde(rename = "roomUUID")]
    pub room_uuid: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrdinaryRoomInfoQueryDto {
    #[serde(rename = "roomUUID")]
    pub room_uuid: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfoDto {
    pub title: String,
    pub begin_time: i64,
    pub end_time: i64,
    pub room_type: RoomType,
    pub room_status: RoomStatus,
    #[serde(rename = "ownerUUID")]
    pub owner_uuid: String,
    pub owner_user_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfoDocDto {
    pub doc_type: DocType,
    #[serde(rename = "docUUID")]
    pub doc_uuid: String,
    pub is_preload: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdinaryRoomInfoDto {
    pub room_info: RoomInfoDto,
    pub docs: Vec<RoomInfoDocDto>,
}

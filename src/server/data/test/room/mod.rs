use crate::{
    model::room::{RoomStatus, RoomType},
    server::{data::room::RoomRepository, model::room::CreateRoomParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_uuid;

fn create_param(room_uuid: &str, owner_uuid: &str) -> CreateRoomParam {
    let begin_time = Utc::now();
    CreateRoomParam {
        room_uuid: room_uuid.to_string(),
        owner_uuid: owner_uuid.to_string(),
        title: "Algebra".to_string(),
        room_type: RoomType::BigClass,
        room_status: RoomStatus::Idle,
        whiteboard_room_uuid: "whiteboard-1".to_string(),
        begin_time,
        end_time: begin_time + Duration::hours(1),
    }
}

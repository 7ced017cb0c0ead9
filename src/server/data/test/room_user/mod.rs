use crate::server::{data::room_user::RoomUserRepository, model::room::CreateRoomUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod is_member;

use crate::{
    model::room::DocType,
    server::{data::room_doc::RoomDocRepository, model::room::CreateRoomDocParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_room;

fn doc_param(doc_uuid: &str, room_uuid: &str, doc_type: DocType) -> CreateRoomDocParam {
    CreateRoomDocParam {
        doc_uuid: doc_uuid.to_string(),
        room_uuid: room_uuid.to_string(),
        doc_type,
        is_preload: true,
    }
}

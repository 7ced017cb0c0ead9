use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub room_uuid: String,
    pub periodic_uuid: String,
    pub owner_uuid: String,
    pub title: String,
    pub room_type: String,
    pub room_status: String,
    pub whiteboard_room_uuid: String,
    pub begin_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub is_delete: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_user::Entity")]
    RoomUser,
    #[sea_orm(has_many = "super::room_doc::Entity")]
    RoomDoc,
}

impl Related<super::room_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomUser.def()
    }
}

impl Related<super::room_doc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomDoc.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

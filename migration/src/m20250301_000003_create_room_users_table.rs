use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_rooms_table::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomUsers::Id))
                    .col(string(RoomUsers::RoomUuid))
                    .col(string(RoomUsers::UserUuid))
                    .col(string_len(RoomUsers::RtcUid, 6))
                    .col(boolean(RoomUsers::IsDelete).default(false))
                    .col(
                        timestamp_with_time_zone(RoomUsers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RoomUsers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_users_room_uuid")
                            .from(RoomUsers::Table, RoomUsers::RoomUuid)
                            .to(Rooms::Table, Rooms::RoomUuid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_users_room_uuid_user_uuid")
                    .table(RoomUsers::Table)
                    .col(RoomUsers::RoomUuid)
                    .col(RoomUsers::UserUuid)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomUsers {
    Table,
    Id,
    RoomUuid,
    UserUuid,
    RtcUid,
    IsDelete,
    CreatedAt,
    UpdatedAt,
}

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
                    .table(RoomDocs::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomDocs::Id))
                    .col(string(RoomDocs::DocUuid))
                    .col(string(RoomDocs::RoomUuid))
                    .col(string(RoomDocs::PeriodicUuid).default(""))
                    .col(string(RoomDocs::DocType))
                    .col(boolean(RoomDocs::IsPreload).default(false))
                    .col(boolean(RoomDocs::IsDelete).default(false))
                    .col(
                        timestamp_with_time_zone(RoomDocs::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RoomDocs::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_docs_room_uuid")
                            .from(RoomDocs::Table, RoomDocs::RoomUuid)
                            .to(Rooms::Table, Rooms::RoomUuid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomDocs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomDocs {
    Table,
    Id,
    DocUuid,
    RoomUuid,
    PeriodicUuid,
    DocType,
    IsPreload,
    IsDelete,
    CreatedAt,
    UpdatedAt,
}

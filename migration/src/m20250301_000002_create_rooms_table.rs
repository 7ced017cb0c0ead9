use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(pk_auto(Rooms::Id))
                    .col(string_uniq(Rooms::RoomUuid))
                    .col(string(Rooms::PeriodicUuid).default(""))
                    .col(string(Rooms::OwnerUuid))
                    .col(string_len(Rooms::Title, 150))
                    .col(string(Rooms::RoomType))
                    .col(string(Rooms::RoomStatus))
                    .col(string(Rooms::WhiteboardRoomUuid))
                    .col(timestamp_with_time_zone(Rooms::BeginTime))
                    .col(timestamp_with_time_zone(Rooms::EndTime))
                    .col(boolean(Rooms::IsDelete).default(false))
                    .col(
                        timestamp_with_time_zone(Rooms::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Rooms::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_owner_uuid")
                    .table(Rooms::Table)
                    .col(Rooms::OwnerUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rooms {
    Table,
    Id,
    RoomUuid,
    PeriodicUuid,
    OwnerUuid,
    Title,
    RoomType,
    RoomStatus,
    WhiteboardRoomUuid,
    BeginTime,
    EndTime,
    IsDelete,
    CreatedAt,
    UpdatedAt,
}

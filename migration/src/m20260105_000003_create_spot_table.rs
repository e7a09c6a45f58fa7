use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_lot_table::Lot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spot::Table)
                    .if_not_exists()
                    .col(pk_auto(Spot::Id))
                    .col(integer(Spot::LotId))
                    .col(integer(Spot::SpotNumber))
                    .col(string(Spot::Status).default("available"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spot_lot_id")
                            .from(Spot::Table, Spot::LotId)
                            .to(Lot::Table, Lot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Spot selection scans (lot_id, status) ordered by id
        manager
            .create_index(
                Index::create()
                    .name("idx_spot_lot_id_status")
                    .table(Spot::Table)
                    .col(Spot::LotId)
                    .col(Spot::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spot_lot_id_spot_number")
                    .table(Spot::Table)
                    .col(Spot::LotId)
                    .col(Spot::SpotNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Spot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Spot {
    Table,
    Id,
    LotId,
    SpotNumber,
    Status,
}

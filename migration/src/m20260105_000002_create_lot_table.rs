use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lot::Table)
                    .if_not_exists()
                    .col(pk_auto(Lot::Id))
                    .col(string(Lot::Name))
                    .col(string(Lot::Address))
                    .col(string(Lot::Pincode))
                    .col(integer(Lot::Capacity))
                    .col(big_integer(Lot::HourlyRateCents))
                    .col(
                        timestamp_with_time_zone(Lot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lot {
    Table,
    Id,
    Name,
    Address,
    Pincode,
    Capacity,
    HourlyRateCents,
    CreatedAt,
}

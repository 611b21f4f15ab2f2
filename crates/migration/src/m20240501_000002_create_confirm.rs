//! Create `confirm` table holding rental confirmations.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Confirm::Table)
                    .if_not_exists()
                    .col(pk_auto(Confirm::Id))
                    .col(ColumnDef::new(Confirm::Name).string_len(255).null())
                    .col(ColumnDef::new(Confirm::PhoneNumber).string_len(64).null())
                    .col(ColumnDef::new(Confirm::Address).string_len(512).null())
                    .col(ColumnDef::new(Confirm::VehicleAddress).string_len(512).null())
                    .col(ColumnDef::new(Confirm::FileName).string_len(512).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Confirm::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Confirm { Table, Id, Name, PhoneNumber, Address, VehicleAddress, FileName }

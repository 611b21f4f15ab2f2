//! Add `saved_seq` to `user`.
//!
//! Bumped on every write so email lookups can pick the most recently saved
//! row when several share an email.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(User::Table)
                    .add_column(ColumnDef::new(User::SavedSeq).big_integer().not_null().default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_email_saved_seq")
                    .table(User::Table)
                    .col(User::Email)
                    .col(User::SavedSeq)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_email_saved_seq").table(User::Table).to_owned())
            .await?;
        manager
            .alter_table(Table::alter().table(User::Table).drop_column(User::SavedSeq).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User { Table, Email, SavedSeq }

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum AuthToken {
    Table,
    Id,
    UserId,
    TokenHash,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(AuthToken::Table)
                .if_not_exists()
                .col(ColumnDef::new(AuthToken::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(AuthToken::UserId).uuid().not_null())
                .col(ColumnDef::new(AuthToken::TokenHash).string().not_null())
                .col(ColumnDef::new(AuthToken::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_auth_token_user")
                        .from(AuthToken::Table, AuthToken::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("ix_auth_token_user_id")
                .table(AuthToken::Table)
                .col(AuthToken::UserId)
                .if_not_exists()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(AuthToken::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

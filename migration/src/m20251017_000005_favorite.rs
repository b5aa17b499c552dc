use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_user::User;

static IDX_FAVORITE_USER_TARGET: &str = "idx-favorite-user_id-kind-target_id";
static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add a foreign key to an existing table, keep it inline
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(string_len(Favorite::Kind, 16))
                    .col(integer(Favorite::TargetId))
                    .col(timestamp(Favorite::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_TARGET)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::Kind)
                    .col(Favorite::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_TARGET)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    Kind,
    TargetId,
    CreatedAt,
}

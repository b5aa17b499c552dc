use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len(Person::Name, 40))
                    .col(string_len(Person::BirthYear, 40))
                    .col(string_len(Person::Gender, 20))
                    .col(string_len(Person::HairColor, 30))
                    .col(string_len(Person::EyeColor, 30))
                    .col(integer(Person::Height))
                    .col(integer(Person::Mass))
                    .col(string_len(Person::SkinColor, 30))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    HairColor,
    EyeColor,
    Height,
    Mass,
    SkinColor,
}

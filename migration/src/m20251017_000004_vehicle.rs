use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 50))
                    .col(string_len(Vehicle::Model, 50))
                    .col(string_len(Vehicle::Manufacturer, 60))
                    .col(integer(Vehicle::Passengers))
                    .col(integer(Vehicle::Crew))
                    .col(integer(Vehicle::CargoCapacity))
                    .col(integer(Vehicle::Consumables))
                    .col(big_integer(Vehicle::CostInCredits))
                    .col(integer(Vehicle::Length))
                    .col(integer(Vehicle::MaxAtmospheringSpeed))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    Passengers,
    Crew,
    CargoCapacity,
    Consumables,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 50))
                    .col(string_len(Planet::Climate, 40))
                    .col(string_len(Planet::Terrain, 50))
                    .col(integer(Planet::Gravity))
                    .col(integer(Planet::Diameter))
                    .col(integer(Planet::OrbitalPeriod))
                    .col(integer(Planet::RotationPeriod))
                    .col(big_integer(Planet::Population))
                    .col(boolean(Planet::SurfaceWater))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Climate,
    Terrain,
    Gravity,
    Diameter,
    OrbitalPeriod,
    RotationPeriod,
    Population,
    SurfaceWater,
}

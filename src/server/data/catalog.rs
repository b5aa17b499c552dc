//! Repositories for the read-only catalog tables: people, planets and vehicles.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::{PersonModel, PlanetModel, VehicleModel},
    favorite::FavoriteTarget,
};

/// Queries over the `person` table.
pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every person ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a person by ID
    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }
}

/// Queries over the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }
}

/// Queries over the `vehicle` table.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every vehicle ordered by ID
    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a vehicle by ID
    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }
}

/// Lookups spanning all catalog tables.
pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    /// Creates a new instance of [`CatalogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the person, planet or vehicle referenced by `target` exists
    pub async fn exists(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let count = match target {
            FavoriteTarget::Person(id) => {
                entity::prelude::Person::find()
                    .filter(entity::person::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
            FavoriteTarget::Planet(id) => {
                entity::prelude::Planet::find()
                    .filter(entity::planet::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
            FavoriteTarget::Vehicle(id) => {
                entity::prelude::Vehicle::find()
                    .filter(entity::vehicle::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }
}

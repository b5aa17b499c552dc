//! Catalog fixture utilities.
//!
//! Inserts people, planets and vehicles with explicit primary keys so tests can refer to them
//! by ID in request paths.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{PersonModel, PlanetModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a person built by [`factory::mock_person_model`].
    pub async fn insert_mock_person(&self, person_id: i32) -> Result<PersonModel, TestError> {
        let person = factory::mock_person_model(person_id);

        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                id: ActiveValue::Set(person.id),
                name: ActiveValue::Set(person.name),
                birth_year: ActiveValue::Set(person.birth_year),
                gender: ActiveValue::Set(person.gender),
                hair_color: ActiveValue::Set(person.hair_color),
                eye_color: ActiveValue::Set(person.eye_color),
                height: ActiveValue::Set(person.height),
                mass: ActiveValue::Set(person.mass),
                skin_color: ActiveValue::Set(person.skin_color),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a planet built by [`factory::mock_planet_model`].
    pub async fn insert_mock_planet(&self, planet_id: i32) -> Result<PlanetModel, TestError> {
        let planet = factory::mock_planet_model(planet_id);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                id: ActiveValue::Set(planet.id),
                name: ActiveValue::Set(planet.name),
                climate: ActiveValue::Set(planet.climate),
                terrain: ActiveValue::Set(planet.terrain),
                gravity: ActiveValue::Set(planet.gravity),
                diameter: ActiveValue::Set(planet.diameter),
                orbital_period: ActiveValue::Set(planet.orbital_period),
                rotation_period: ActiveValue::Set(planet.rotation_period),
                population: ActiveValue::Set(planet.population),
                surface_water: ActiveValue::Set(planet.surface_water),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vehicle built by [`factory::mock_vehicle_model`].
    pub async fn insert_mock_vehicle(&self, vehicle_id: i32) -> Result<VehicleModel, TestError> {
        let vehicle = factory::mock_vehicle_model(vehicle_id);

        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                id: ActiveValue::Set(vehicle.id),
                name: ActiveValue::Set(vehicle.name),
                model: ActiveValue::Set(vehicle.model),
                manufacturer: ActiveValue::Set(vehicle.manufacturer),
                passengers: ActiveValue::Set(vehicle.passengers),
                crew: ActiveValue::Set(vehicle.crew),
                cargo_capacity: ActiveValue::Set(vehicle.cargo_capacity),
                consumables: ActiveValue::Set(vehicle.consumables),
                cost_in_credits: ActiveValue::Set(vehicle.cost_in_credits),
                length: ActiveValue::Set(vehicle.length),
                max_atmosphering_speed: ActiveValue::Set(vehicle.max_atmosphering_speed),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

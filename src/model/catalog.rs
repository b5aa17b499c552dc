use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub hair_color: String,
    pub eye_color: String,
    pub height: i32,
    pub mass: i32,
    pub skin_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub gravity: i32,
    pub diameter: i32,
    pub orbital_period: i32,
    pub rotation_period: i32,
    pub population: i64,
    pub surface_water: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: i32,
    pub crew: i32,
    pub cargo_capacity: i32,
    pub consumables: i32,
    pub cost_in_credits: i64,
    pub length: i32,
    pub max_atmosphering_speed: i32,
}

impl From<entity::person::Model> for PersonDto {
    fn from(person: entity::person::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            birth_year: person.birth_year,
            gender: person.gender,
            hair_color: person.hair_color,
            eye_color: person.eye_color,
            height: person.height,
            mass: person.mass,
            skin_color: person.skin_color,
        }
    }
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            gravity: planet.gravity,
            diameter: planet.diameter,
            orbital_period: planet.orbital_period,
            rotation_period: planet.rotation_period,
            population: planet.population,
            surface_water: planet.surface_water,
        }
    }
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            passengers: vehicle.passengers,
            crew: vehicle.crew,
            cargo_capacity: vehicle.cargo_capacity,
            consumables: vehicle.consumables,
            cost_in_credits: vehicle.cost_in_credits,
            length: vehicle.length,
            max_atmosphering_speed: vehicle.max_atmosphering_speed,
        }
    }
}

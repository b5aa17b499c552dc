//! Factory functions for generating mock catalog database models.
//!
//! Names include the ID so tests inserting several rows can tell them apart.

use crate::model::{PersonModel, PlanetModel, VehicleModel};

/// Create a mock person database model for testing.
pub fn mock_person_model(person_id: i32) -> PersonModel {
    PersonModel {
        id: person_id,
        name: format!("Person {}", person_id),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        hair_color: "blond".to_string(),
        eye_color: "blue".to_string(),
        height: 172,
        mass: 77,
        skin_color: "fair".to_string(),
    }
}

/// Create a mock planet database model for testing.
pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        id: planet_id,
        name: format!("Planet {}", planet_id),
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
        gravity: 1,
        diameter: 10465,
        orbital_period: 304,
        rotation_period: 23,
        population: 200_000,
        surface_water: true,
    }
}

/// Create a mock vehicle database model for testing.
pub fn mock_vehicle_model(vehicle_id: i32) -> VehicleModel {
    VehicleModel {
        id: vehicle_id,
        name: format!("Vehicle {}", vehicle_id),
        model: "Digger Crawler".to_string(),
        manufacturer: "Corellia Mining Corporation".to_string(),
        passengers: 30,
        crew: 46,
        cargo_capacity: 50000,
        consumables: 2,
        cost_in_credits: 150_000,
        length: 36,
        max_atmosphering_speed: 30,
    }
}

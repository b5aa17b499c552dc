//! Read-only endpoints for the people, planet and vehicle catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{PersonDto, PlanetDto, VehicleDto},
    },
    server::{
        data::catalog::{PersonRepository, PlanetRepository, VehicleRepository},
        controller::column_id,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
    },
};

/// OpenAPI tag of the catalog endpoints
pub static CATALOG_TAG: &str = "catalog";

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Every person in the catalog", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let person_repo = PersonRepository::new(&state.db);

    let people: Vec<PersonDto> = person_repo
        .get_all()
        .await?
        .into_iter()
        .map(PersonDto::from)
        .collect();

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CATALOG_TAG,
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let person_repo = PersonRepository::new(&state.db);

    let person = match column_id(person_id) {
        Some(id) => person_repo.get_by_id(id).await?,
        None => None,
    }
    .ok_or(NotFoundError::Person(person_id))?;

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Every planet in the catalog", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let planets: Vec<PlanetDto> = planet_repo
        .get_all()
        .await?
        .into_iter()
        .map(PlanetDto::from)
        .collect();

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = i64, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let planet_repo = PlanetRepository::new(&state.db);

    let planet = match column_id(planet_id) {
        Some(id) => planet_repo.get_by_id(id).await?,
        None => None,
    }
    .ok_or(NotFoundError::Planet(planet_id))?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Every vehicle in the catalog", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let vehicles: Vec<VehicleDto> = vehicle_repo
        .get_all()
        .await?
        .into_iter()
        .map(VehicleDto::from)
        .collect();

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a single vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = CATALOG_TAG,
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repo = VehicleRepository::new(&state.db);

    let vehicle = match column_id(vehicle_id) {
        Some(id) => vehicle_repo.get_by_id(id).await?,
        None => None,
    }
    .ok_or(NotFoundError::Vehicle(vehicle_id))?;

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))))
}

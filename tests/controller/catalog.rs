//! Tests for the people, planet and vehicle endpoints.
//!
//! Verifies list endpoints return every catalog entry, single entry endpoints return the
//! serialized record for existing IDs and 404 for missing ones, and database failures map to
//! 500.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::controller::catalog::{
    get_people, get_person, get_planet, get_planets, get_vehicle, get_vehicles,
};

use super::*;

/// Tests that every person is listed.
///
/// Expected: Ok with 200 OK response containing both people ordered by ID
#[tokio::test]
async fn lists_all_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_person(2)
        .with_person(1)
        .build()
        .await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[1]["id"], 2);

    Ok(())
}

/// Tests that a single person is returned with all fields serialized.
///
/// Expected: Ok with 200 OK response matching the stored record
#[tokio::test]
async fn returns_person_for_existing_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_person(1)
        .with_person(2)
        .build()
        .await?;

    for person_id in [1, 2] {
        let expected = catalog_factory::mock_person_model(person_id);

        let result = get_person(State(test.into_app_state()), Path(i64::from(person_id))).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["id"], person_id);
        assert_eq!(body["name"], expected.name);
        assert_eq!(body["birth_year"], expected.birth_year);
        assert_eq!(body["height"], expected.height);
        assert_eq!(body["skin_color"], expected.skin_color);
    }

    Ok(())
}

/// Tests that a missing person yields 404.
///
/// Expected: Err converting to 404 Not Found with "Person not found"
#[tokio::test]
async fn returns_404_for_nonexistent_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_person(1)
        .build()
        .await?;

    let result = get_person(State(test.into_app_state()), Path(2)).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Person not found");

    Ok(())
}

/// Tests that a database error surfaces as 500 with the error text.
///
/// Expected: Err converting to 500 Internal Server Error with a non-empty message
#[tokio::test]
async fn returns_500_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert!(!body["error"].as_str().unwrap_or_default().is_empty());

    Ok(())
}

/// Tests that an empty catalog lists as an empty array.
///
/// Expected: Ok with 200 OK response and `[]`
#[tokio::test]
async fn lists_empty_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_planets(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, serde_json::json!([]));

    Ok(())
}

#[tokio::test]
async fn returns_planet_for_existing_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_planet(5)
        .build()
        .await?;

    let result = get_planet(State(test.into_app_state()), Path(5)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["surface_water"], true);
    assert_eq!(
        body["population"],
        catalog_factory::mock_planet_model(5).population
    );

    Ok(())
}

#[tokio::test]
async fn returns_404_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = get_planet(State(test.into_app_state()), Path(5)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Planet not found");

    Ok(())
}

#[tokio::test]
async fn lists_all_vehicles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_vehicle(1)
        .with_vehicle(2)
        .with_vehicle(3)
        .build()
        .await?;

    let result = get_vehicles(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    assert_eq!(
        body[0]["manufacturer"],
        catalog_factory::mock_vehicle_model(1).manufacturer
    );

    Ok(())
}

#[tokio::test]
async fn returns_404_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_vehicle(1)
        .build()
        .await?;

    let result = get_vehicle(State(test.into_app_state()), Path(4)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Vehicle not found");

    Ok(())
}

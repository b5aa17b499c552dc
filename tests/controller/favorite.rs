//! Tests for the favorite add and remove endpoints.
//!
//! Verifies the status codes and messages for adding, re-adding and removing favorites of
//! each kind, the user-first not-found policy, and that the favorites listing reflects the
//! changes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::FavoriteKind;
use holonet::server::controller::{
    favorite::{
        add_person_favorite, add_planet_favorite, add_vehicle_favorite, remove_person_favorite,
        remove_planet_favorite, remove_vehicle_favorite,
    },
    user::get_user_favorites,
};

use super::*;

/// Tests adding a planet favorite for an existing user and planet.
///
/// Expected: Ok with 200 OK, "Planet added to favorites" and a new row for user 3 / planet 5
#[tokio::test]
async fn adds_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(3)
        .with_planet(5)
        .build()
        .await?;

    let result = add_planet_favorite(State(test.into_app_state()), Path((3, 5))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"details": "Planet added to favorites"})
    );
    assert_eq!(test.favorite().count(3, FavoriteKind::Planet, 5).await?, 1);

    Ok(())
}

/// Tests adding the same person twice.
///
/// Expected: 200 OK both times, second response reports the duplicate, exactly one row
#[tokio::test]
async fn adding_person_twice_keeps_single_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(1)
        .with_person(1)
        .build()
        .await?;

    let first = add_person_favorite(State(test.into_app_state()), Path((1, 1))).await;
    let first = first.unwrap().into_response();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(
        json_body(first).await["details"],
        "Person added to favorites"
    );

    let second = add_person_favorite(State(test.into_app_state()), Path((1, 1))).await;
    let second = second.unwrap().into_response();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(
        json_body(second).await["details"],
        "This person is already in favorites"
    );

    assert_eq!(test.favorite().count(1, FavoriteKind::Person, 1).await?, 1);

    Ok(())
}

/// Tests that a missing user is reported even when the person exists.
///
/// Expected: Err converting to 404 Not Found with "User not found"
#[tokio::test]
async fn returns_404_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_person(1)
        .build()
        .await?;

    let result = add_person_favorite(State(test.into_app_state()), Path((9, 1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "User not found");

    Ok(())
}

/// Tests that a missing user is reported before a missing person.
///
/// Expected: Err converting to 404 Not Found with "User not found"
#[tokio::test]
async fn returns_user_404_when_both_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = add_person_favorite(State(test.into_app_state()), Path((9, 1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "User not found");

    Ok(())
}

/// Tests adding a vehicle that does not exist.
///
/// Expected: Err converting to 404 Not Found with "Vehicle not found" and no row inserted
#[tokio::test]
async fn returns_404_for_nonexistent_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().with_user(1).build().await?;

    let result = add_vehicle_favorite(State(test.into_app_state()), Path((1, 2))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Vehicle not found");
    assert_eq!(test.favorite().count(1, FavoriteKind::Vehicle, 2).await?, 0);

    Ok(())
}

/// Tests removing a favorite that does not exist.
///
/// Expected: Err converting to 404 Not Found with "Favorite not found"
#[tokio::test]
async fn remove_returns_404_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(1)
        .with_planet(1)
        .build()
        .await?;

    let result = remove_planet_favorite(State(test.into_app_state()), Path((1, 1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Favorite not found");

    Ok(())
}

/// Tests removing a favorite for a user that does not exist.
///
/// Expected: Err converting to 404 Not Found with "User not found"
#[tokio::test]
async fn remove_returns_404_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = remove_vehicle_favorite(State(test.into_app_state()), Path((1, 1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "User not found");

    Ok(())
}

/// Tests removing an existing vehicle favorite.
///
/// Expected: Ok with 200 OK, "Vehicle removed from favorites successfully" and the row deleted
#[tokio::test]
async fn removes_vehicle_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(1)
        .with_vehicle(2)
        .with_favorite(1, FavoriteKind::Vehicle, 2)
        .build()
        .await?;

    let result = remove_vehicle_favorite(State(test.into_app_state()), Path((1, 2))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await["details"],
        "Vehicle removed from favorites successfully"
    );
    assert_eq!(test.favorite().count(1, FavoriteKind::Vehicle, 2).await?, 0);

    Ok(())
}

/// Tests the add, list, remove, list cycle for a person favorite.
///
/// Expected: the favorite is listed with matching `people_id` and `associated_user` after
/// adding, and absent after removal
#[tokio::test]
async fn favorites_listing_reflects_add_and_remove() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(2)
        .with_person(7)
        .with_planet(7)
        .build()
        .await?;

    add_person_favorite(State(test.into_app_state()), Path((2, 7)))
        .await
        .unwrap();
    add_planet_favorite(State(test.into_app_state()), Path((2, 7)))
        .await
        .unwrap();

    let listed = get_user_favorites(State(test.into_app_state()), Path(2)).await;
    let body = json_body(listed.unwrap().into_response()).await;
    let favorites = body.as_array().expect("expected array");
    assert_eq!(favorites.len(), 2);
    assert!(favorites
        .iter()
        .any(|f| f["people_id"] == 7 && f["associated_user"] == 2));

    let removed = remove_person_favorite(State(test.into_app_state()), Path((2, 7))).await;
    assert_eq!(removed.unwrap().into_response().status(), StatusCode::OK);

    let listed = get_user_favorites(State(test.into_app_state()), Path(2)).await;
    let body = json_body(listed.unwrap().into_response()).await;
    let favorites = body.as_array().expect("expected array");
    assert_eq!(favorites.len(), 1);
    assert!(favorites.iter().all(|f| f["people_id"].is_null()));
    assert_eq!(favorites[0]["planet_id"], 7);

    Ok(())
}

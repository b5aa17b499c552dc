//! Tests exercising the complete application router.
//!
//! Requests go through `build_app` with `tower::ServiceExt::oneshot`, covering path
//! matching, path parameter coercion, CORS headers, the sitemap and the JSON fallback.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use entity::sea_orm_active_enums::FavoriteKind;
use holonet::server::startup::build_app;
use tower::ServiceExt;

use super::*;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Expected: every registered operation is listed as `METHOD /path`
#[tokio::test]
async fn sitemap_lists_registered_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = build_app(test.into_app_state());

    let resp = app.oneshot(request(Method::GET, "/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let routes: Vec<&str> = body["routes"]
        .as_array()
        .expect("expected routes array")
        .iter()
        .filter_map(|r| r.as_str())
        .collect();

    for expected in [
        "GET /",
        "GET /user",
        "GET /people",
        "GET /people/{id}",
        "GET /planets",
        "GET /planets/{id}",
        "GET /vehicles",
        "GET /vehicles/{id}",
        "GET /users",
        "GET /users/{id}/favorites",
        "POST /favorite/{user_id}/people/{id}",
        "DELETE /favorite/{user_id}/people/{id}",
        "POST /favorite/{user_id}/planet/{id}",
        "DELETE /favorite/{user_id}/planet/{id}",
        "POST /favorite/{user_id}/vehicle/{id}",
        "DELETE /favorite/{user_id}/vehicle/{id}",
    ] {
        assert!(routes.contains(&expected), "missing route {}", expected);
    }
    assert_eq!(routes.len(), 16);

    Ok(())
}

/// Expected: the full add-then-list flow works through the router
#[tokio::test]
async fn adds_and_lists_favorite_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(3)
        .with_planet(5)
        .build()
        .await?;
    let app = build_app(test.into_app_state());

    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/favorite/3/planet/5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["details"], "Planet added to favorites");

    let resp = app
        .oneshot(request(Method::GET, "/users/3/favorites"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["associated_user"], 3);
    assert_eq!(body[0]["planet_id"], 5);
    assert_eq!(test.favorite().count(3, FavoriteKind::Planet, 5).await?, 1);

    Ok(())
}

/// Expected: 400 Bad Request when a path ID is not an integer
#[tokio::test]
async fn rejects_non_integer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = build_app(test.into_app_state());

    let resp = app
        .oneshot(request(Method::GET, "/people/luke"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 404 for IDs beyond the ID column range instead of a parse rejection
#[tokio::test]
async fn out_of_range_id_returns_404() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user(1)
        .build()
        .await?;
    let app = build_app(test.into_app_state());

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/people/3000000000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Person not found");

    let resp = app
        .clone()
        .oneshot(request(Method::GET, "/users/3000000000/favorites"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "User not found");

    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/favorite/1/planet/3000000000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Planet not found");

    let resp = app
        .clone()
        .oneshot(request(Method::DELETE, "/favorite/1/vehicle/3000000000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Favorite not found");

    // The user is still checked before the out-of-range target
    let resp = app
        .oneshot(request(Method::POST, "/favorite/2/people/3000000000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "User not found");

    Ok(())
}

/// Expected: JSON 404 for a path no route matches
#[tokio::test]
async fn unknown_route_returns_json_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = build_app(test.into_app_state());

    let resp = app
        .oneshot(request(Method::GET, "/starships"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Route not found");

    Ok(())
}

/// Expected: cross-origin requests receive an allow-origin header
#[tokio::test]
async fn allows_cross_origin_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let app = build_app(test.into_app_state());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/people")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .expect("Failed to build request");
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    Ok(())
}

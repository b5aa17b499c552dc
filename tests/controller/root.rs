//! Tests for the greeting endpoint and the router-derived sitemap.

use axum::{http::StatusCode, response::IntoResponse};
use holonet::server::controller::root::hello;

use super::*;

/// Expected: 200 OK with the static greeting
#[tokio::test]
async fn hello_returns_greeting() {
    let resp = hello().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({"msg": "Hello, this is your GET /user response "})
    );
}

//! Sitemap, greeting and fallback handlers.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::model::api::{ErrorDto, HelloDto, SitemapDto};

/// OpenAPI tag of the root endpoints
pub static ROOT_TAG: &str = "root";

/// List every route registered on the server
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Registered routes", body = SitemapDto),
    ),
)]
pub async fn sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}

/// Static greeting
#[utoipa::path(
    get,
    path = "/user",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Greeting", body = HelloDto),
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HelloDto {
            msg: "Hello, this is your GET /user response ".to_string(),
        }),
    )
}

/// Fallback for paths that match no route
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}

//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! Swagger UI is served at `/api/docs`, and the route sitemap served at `/` is derived from
//! the same document.

use std::sync::Arc;

use axum::{Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of all registered routes
/// - `GET /user` - Static greeting
/// - `GET /people`, `GET /people/{id}` - People catalog
/// - `GET /planets`, `GET /planets/{id}` - Planet catalog
/// - `GET /vehicles`, `GET /vehicles/{id}` - Vehicle catalog
/// - `GET /users` - All users
/// - `GET /users/{id}/favorites` - Favorites of a user
/// - `POST|DELETE /favorite/{user_id}/people/{id}` - Toggle a person favorite
/// - `POST|DELETE /favorite/{user_id}/planet/{id}` - Toggle a planet favorite
/// - `POST|DELETE /favorite/{user_id}/vehicle/{id}` - Toggle a vehicle favorite
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes, ready to be given its state.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::root::ROOT_TAG, description = "Sitemap and greeting"),
        (name = controller::catalog::CATALOG_TAG, description = "People, planets and vehicles"),
        (name = controller::user::USER_TAG, description = "Users and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Add and remove favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::root::sitemap))
        .routes(routes!(controller::root::hello))
        .routes(routes!(controller::catalog::get_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_vehicles))
        .routes(routes!(controller::catalog::get_vehicle))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_person_favorite,
            controller::favorite::remove_person_favorite
        ))
        .routes(routes!(
            controller::favorite::add_planet_favorite,
            controller::favorite::remove_planet_favorite
        ))
        .routes(routes!(
            controller::favorite::add_vehicle_favorite,
            controller::favorite::remove_vehicle_favorite
        ))
        .split_for_parts();

    let sitemap = Arc::new(sitemap(&api));

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::root::not_found)
        .layer(Extension(sitemap))
}

/// Lists every operation in the OpenAPI document as `METHOD /path`.
pub fn sitemap(api: &utoipa::openapi::OpenApi) -> SitemapDto {
    let mut routes = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            if operation.is_some() {
                routes.push(format!("{} {}", method, path));
            }
        }
    }

    SitemapDto { routes }
}

//! HTTP controller endpoints for the Holonet web API.
//!
//! This module contains Axum handlers for the catalog, users and favorites. Controllers
//! extract path parameters, call repositories or services, and map results to JSON responses.
//! Each handler is annotated for utoipa so it appears in the OpenAPI document and the sitemap.

pub mod catalog;
pub mod favorite;
pub mod root;
pub mod user;

/// Narrows an ID taken from the request path to the width of the ID columns.
///
/// IDs outside the `i32` range can't match any row and yield `None`.
fn column_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

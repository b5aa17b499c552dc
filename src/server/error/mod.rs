//! Error types for the Holonet server application.
//!
//! This module provides the unified error type returned by services and HTTP handlers. Domain
//! errors (configuration, missing records) live in their own submodules. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display` and `Error`
//! implementations.

pub mod config;
pub mod not_found;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError},
};

/// Main error type for the Holonet server application.
///
/// Aggregates domain-specific error types and external library errors into a single type.
/// `#[from]` conversions allow `?` on repository results. The `IntoResponse` implementation
/// maps each variant to an HTTP status and JSON error body.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Not found errors (a referenced user, catalog entry or favorite does not exist)
/// - External library errors (database, listener I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A record referenced by the request does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing users, catalog entries or favorites
/// - 500 Internal Server Error - For all other errors, with the error text as message
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns its text in the JSON body so API consumers can see what failed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

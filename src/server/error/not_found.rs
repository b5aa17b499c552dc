//! Errors for records that do not exist, returned as 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::FavoriteKind;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::favorite::FavoriteTarget};

/// A record referenced by the request path does not exist.
///
/// IDs are kept as given in the path, which may lie outside the range of the ID columns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    /// No user with this ID
    #[error("User ID {0} not found")]
    User(i64),
    /// No person with this ID
    #[error("Person ID {0} not found")]
    Person(i64),
    /// No planet with this ID
    #[error("Planet ID {0} not found")]
    Planet(i64),
    /// No vehicle with this ID
    #[error("Vehicle ID {0} not found")]
    Vehicle(i64),
    /// The user has no favorite pointing at this catalog entry
    #[error("Favorite {} ID {target_id} for user ID {user_id} not found", .kind.to_value())]
    Favorite {
        /// Owner of the favorite
        user_id: i32,
        /// Catalog table of the target
        kind: FavoriteKind,
        /// ID of the target within its table
        target_id: i64,
    },
}

impl NotFoundError {
    /// Error for a catalog entry of the given kind that does not exist.
    pub fn catalog(kind: FavoriteKind, id: i64) -> Self {
        match kind {
            FavoriteKind::Person => Self::Person(id),
            FavoriteKind::Planet => Self::Planet(id),
            FavoriteKind::Vehicle => Self::Vehicle(id),
        }
    }

    /// Error for a favorite target missing from its catalog table.
    pub fn target(target: FavoriteTarget) -> Self {
        Self::catalog(target.kind(), target.id().into())
    }

    /// Error for a favorite the user does not have.
    pub fn favorite(user_id: i32, target: FavoriteTarget) -> Self {
        Self::Favorite {
            user_id,
            kind: target.kind(),
            target_id: target.id().into(),
        }
    }

    /// Message returned to API consumers.
    pub fn message(&self) -> &'static str {
        match self {
            Self::User(_) => "User not found",
            Self::Person(_) => "Person not found",
            Self::Planet(_) => "Planet not found",
            Self::Vehicle(_) => "Vehicle not found",
            Self::Favorite { .. } => "Favorite not found",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

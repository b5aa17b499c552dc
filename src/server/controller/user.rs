//! User listing and per-user favorites endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{FavoriteDto, UserDto, UserFavoritesDto},
    },
    server::{
        controller::column_id,
        data::user::UserRepository,
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag of the user endpoints
pub static USER_TAG: &str = "user";

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repo = UserRepository::new(&state.db);

    let users: Vec<UserDto> = user_repo
        .get_all()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get the favorites of a user
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites, or a details message when there are none", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let user_id = column_id(user_id).ok_or(NotFoundError::User(user_id))?;
    let favorite_service = FavoriteService::new(&state.db);

    let favorites: Vec<FavoriteDto> = favorite_service
        .get_user_favorites(user_id)
        .await?
        .into_iter()
        .map(FavoriteDto::from)
        .collect();

    Ok((StatusCode::OK, Json(UserFavoritesDto::from(favorites))))
}

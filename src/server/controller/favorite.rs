//! Endpoints adding and removing catalog entries from a user's favorites.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::FavoriteKind;

use crate::{
    model::api::{DetailsDto, ErrorDto},
    server::{
        controller::column_id,
        error::{not_found::NotFoundError, Error},
        model::{
            app::AppState,
            favorite::{FavoriteOutcome, FavoriteTarget},
        },
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag of the favorite endpoints
pub static FAVORITE_TAG: &str = "favorite";

/// Resolves the path IDs of a favorite route to a user and a target.
///
/// A user ID outside the column range is reported as a missing user. A target ID outside
/// the range is reported through `missing_target`, after the user has been checked.
async fn resolve_target(
    favorite_service: &FavoriteService<'_>,
    user_id: i64,
    kind: FavoriteKind,
    target_id: i64,
    missing_target: impl FnOnce(i32) -> NotFoundError,
) -> Result<(i32, FavoriteTarget), Error> {
    let user_id = column_id(user_id).ok_or(NotFoundError::User(user_id))?;

    match column_id(target_id) {
        Some(target_id) => Ok((user_id, FavoriteTarget::new(kind, target_id))),
        None => {
            favorite_service.ensure_user_exists(user_id).await?;

            Err(missing_target(user_id).into())
        }
    }
}

async fn add_favorite(
    state: &AppState,
    (user_id, target_id): (i64, i64),
    kind: FavoriteKind,
) -> Result<(StatusCode, Json<DetailsDto>), Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let (user_id, target) =
        resolve_target(&favorite_service, user_id, kind, target_id, |_| {
            NotFoundError::catalog(kind, target_id)
        })
        .await?;

    let details = match favorite_service.add_favorite(user_id, target).await? {
        FavoriteOutcome::Added(_) => format!("{} added to favorites", target.label()),
        FavoriteOutcome::AlreadyExists(_) => format!(
            "This {} is already in favorites",
            target.label().to_lowercase()
        ),
    };

    Ok((StatusCode::OK, Json(DetailsDto { details })))
}

async fn remove_favorite(
    state: &AppState,
    (user_id, target_id): (i64, i64),
    kind: FavoriteKind,
) -> Result<(StatusCode, Json<DetailsDto>), Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let (user_id, target) =
        resolve_target(&favorite_service, user_id, kind, target_id, |user_id| {
            NotFoundError::Favorite {
                user_id,
                kind,
                target_id,
            }
        })
        .await?;

    favorite_service.remove_favorite(user_id, target).await?;

    Ok((
        StatusCode::OK,
        Json(DetailsDto {
            details: format!("{} removed from favorites successfully", target.label()),
        }),
    ))
}

/// Add a person to a user's favorites
///
/// Adding a person that is already a favorite succeeds without creating a second entry.
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person added or already present", body = DetailsDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_person_favorite(
    State(state): State<AppState>,
    Path(ids): Path<(i64, i64)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, ids, FavoriteKind::Person).await
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person removed", body = DetailsDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_person_favorite(
    State(state): State<AppState>,
    Path(ids): Path<(i64, i64)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, ids, FavoriteKind::Person).await
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet added or already present", body = DetailsDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    Path(ids): Path<(i64, i64)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, ids, FavoriteKind::Planet).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet removed", body = DetailsDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_planet_favorite(
    State(state): State<AppState>,
    Path(ids): Path<(i64, i64)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, ids, FavoriteKind::Planet).await
}

/// Add a vehicle to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle added or already present", body = DetailsDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle_favorite(
    State(state): State<AppState>,
    Path(ids): Path<(i64, i64)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, ids, FavoriteKind::Vehicle).await
}

/// Remove a vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("id" = i64, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Vehicle removed", body = DetailsDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_vehicle_favorite(
    State(state): State<AppState>,
    Path(ids): Path<(i64, i64)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, ids, FavoriteKind::Vehicle).await
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::DetailsDto;

/// A user account. The password hash is never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub is_active: bool,
}

/// A favorite as exposed over the API.
///
/// Exactly one of `people_id`, `planet_id` and `vehicle_id` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    /// ID of the user owning the favorite
    pub associated_user: i32,
    pub people_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

/// Favorites listing of a user, replaced by a details message when the user has none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum UserFavoritesDto {
    Favorites(Vec<FavoriteDto>),
    Empty(DetailsDto),
}

impl From<Vec<FavoriteDto>> for UserFavoritesDto {
    fn from(favorites: Vec<FavoriteDto>) -> Self {
        if favorites.is_empty() {
            Self::Empty(DetailsDto {
                details: "user has no favorites".to_string(),
            })
        } else {
            Self::Favorites(favorites)
        }
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

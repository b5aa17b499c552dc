//! Favorite targets and outcomes shared by the service and the controllers.

use std::fmt;

use entity::sea_orm_active_enums::FavoriteKind;

use crate::{model::user::FavoriteDto, server::model::db::FavoriteModel};

/// The catalog entry a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    /// Row of the `person` table
    Person(i32),
    /// Row of the `planet` table
    Planet(i32),
    /// Row of the `vehicle` table
    Vehicle(i32),
}

impl FavoriteTarget {
    /// Rebuilds a target from the `kind` and `target_id` columns of a favorite row.
    pub fn new(kind: FavoriteKind, target_id: i32) -> Self {
        match kind {
            FavoriteKind::Person => Self::Person(target_id),
            FavoriteKind::Planet => Self::Planet(target_id),
            FavoriteKind::Vehicle => Self::Vehicle(target_id),
        }
    }

    /// Kind stored in the `kind` column.
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Person(_) => FavoriteKind::Person,
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Vehicle(_) => FavoriteKind::Vehicle,
        }
    }

    /// ID of the target row, stored in the `target_id` column.
    pub fn id(&self) -> i32 {
        match self {
            Self::Person(id) | Self::Planet(id) | Self::Vehicle(id) => *id,
        }
    }

    /// Capitalized name of the target kind used in API messages, e.g. `Planet`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person(_) => "Person",
            Self::Planet(_) => "Planet",
            Self::Vehicle(_) => "Vehicle",
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ID {}", self.label().to_lowercase(), self.id())
    }
}

impl From<&FavoriteModel> for FavoriteTarget {
    fn from(favorite: &FavoriteModel) -> Self {
        Self::new(favorite.kind, favorite.target_id)
    }
}

/// Result of adding a favorite. Adding one that already exists is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// A new favorite row was inserted
    Added(FavoriteModel),
    /// The user already had this favorite, the existing row is returned
    AlreadyExists(FavoriteModel),
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        let target = FavoriteTarget::from(&favorite);

        let (people_id, planet_id, vehicle_id) = match target {
            FavoriteTarget::Person(id) => (Some(id), None, None),
            FavoriteTarget::Planet(id) => (None, Some(id), None),
            FavoriteTarget::Vehicle(id) => (None, None, Some(id)),
        };

        Self {
            id: favorite.id,
            associated_user: favorite.user_id,
            people_id,
            planet_id,
            vehicle_id,
        }
    }
}

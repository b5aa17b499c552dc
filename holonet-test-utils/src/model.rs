//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holonet crate to keep test code consistent.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for person database model.
pub type PersonModel = entity::person::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for favorite database model.
pub type FavoriteModel = entity::favorite::Model;

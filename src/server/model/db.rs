//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so repositories and
//! services don't have to import from the `entity` crate directly.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `name` / `last_name` - Display names, `last_name` is optional
/// - `email` - Unique email address
/// - `password` - Password hash, never serialized
/// - `is_active` - Whether the account is enabled
pub type UserModel = entity::user::Model;

/// Type alias for person database model.
pub type PersonModel = entity::person::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `kind` - Which catalog table `target_id` refers to
/// - `target_id` - Primary key of the favorited person, planet or vehicle
/// - `created_at` - Timestamp when the favorite was added
pub type FavoriteModel = entity::favorite::Model;

//! Test fixture modules for database row creation.
//!
//! Each submodule provides helpers reachable from [`TestContext`](crate::TestContext) for
//! inserting rows during a test, plus a `factory` module of pure functions building in-memory
//! models with standard test values:
//!
//! - `catalog` - People, planets and vehicles
//! - `favorite` - Favorite rows linking a user to a catalog entry
//! - `user` - User accounts

pub mod catalog;
pub mod favorite;
pub mod user;

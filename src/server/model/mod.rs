//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, type aliases for the
//! SeaORM entity models, and the favorite target variant used by the favorites repository,
//! service and controllers.

pub mod app;
pub mod db;
pub mod favorite;

//! Holonet: a REST API over a catalog of people, planets and vehicles, with per-user favorites.

pub mod model;
pub mod server;

//! Server application core modules.
//!
//! This module contains all server-side functionality for Holonet: configuration, database
//! startup, HTTP routing and controllers, the favorites service and the repositories over the
//! catalog, user and favorite tables.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;

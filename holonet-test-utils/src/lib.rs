//! Shared test utilities for the Holonet workspace.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables and fixture rows a test
//! needs, then `build()` returns a [`TestContext`] backed by an in-memory SQLite database with
//! fixture helpers for inserting further rows during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{catalog::factory as catalog_factory, user::factory as user_factory},
        TestBuilder, TestContext, TestError,
    };
}

//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table and borrow any `ConnectionTrait`
//! implementor, so they work against a pooled connection or a transaction. They return
//! `DbErr` directly, leaving not-found policy to the service and controller layers.

pub mod catalog;
pub mod favorite;
pub mod user;

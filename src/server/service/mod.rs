//! Business logic services.
//!
//! Services coordinate between repositories and decide the not-found and duplicate policy
//! for operations that touch more than one table.

pub mod favorite;

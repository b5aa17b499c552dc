//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods can be chained, with all operations queued and executed during the
//! final `build()` call.

use entity::sea_orm_active_enums::FavoriteKind;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixture
/// rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert, by primary key
    users: Vec<i32>,
    people: Vec<i32>,
    planets: Vec<i32>,
    vehicles: Vec<i32>,
    favorites: Vec<(i32, FavoriteKind, i32)>, // (user_id, kind, target_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            people: Vec::new(),
            planets: Vec::new(),
            vehicles: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates User, Person, Planet, Vehicle and Favorite tables.
    pub fn with_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Person)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock user with the given ID into the database.
    pub fn with_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Insert mock person with the given ID into the database.
    pub fn with_person(mut self, person_id: i32) -> Self {
        self.people.push(person_id);
        self
    }

    /// Insert mock planet with the given ID into the database.
    pub fn with_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert mock vehicle with the given ID into the database.
    pub fn with_vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicles.push(vehicle_id);
        self
    }

    /// Insert a favorite row for a user.
    ///
    /// Only the user must exist, the target ID is stored as-is.
    ///
    /// # Arguments
    /// - `user_id` - The user owning the favorite
    /// - `kind` - Which catalog table the target belongs to
    /// - `target_id` - ID of the favorited person, planet or vehicle
    pub fn with_favorite(mut self, user_id: i32, kind: FavoriteKind, target_id: i32) -> Self {
        self.favorites.push((user_id, kind, target_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (all tables if specified, then custom tables)
    /// 2. Inserts fixtures (users, people, planets, vehicles, then favorites)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for user_id in self.users {
            setup.user().insert_mock_user(user_id).await?;
        }

        for person_id in self.people {
            setup.catalog().insert_mock_person(person_id).await?;
        }

        for planet_id in self.planets {
            setup.catalog().insert_mock_planet(planet_id).await?;
        }

        for vehicle_id in self.vehicles {
            setup.catalog().insert_mock_vehicle(vehicle_id).await?;
        }

        for (user_id, kind, target_id) in self.favorites {
            setup
                .favorite()
                .insert_favorite(user_id, kind, target_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

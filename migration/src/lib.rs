pub use sea_orm_migration::prelude::*;

mod m20251017_000001_user;
mod m20251017_000002_person;
mod m20251017_000003_planet;
mod m20251017_000004_vehicle;
mod m20251017_000005_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_user::Migration),
            Box::new(m20251017_000002_person::Migration),
            Box::new(m20251017_000003_planet::Migration),
            Box::new(m20251017_000004_vehicle::Migration),
            Box::new(m20251017_000005_favorite::Migration),
        ]
    }
}

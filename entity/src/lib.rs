pub mod prelude;

pub mod favorite;
pub mod person;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod user;
pub mod vehicle;

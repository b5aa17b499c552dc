pub use super::favorite::Entity as Favorite;
pub use super::person::Entity as Person;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;

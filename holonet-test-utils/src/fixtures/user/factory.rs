//! Factory functions for generating mock user database models.

use crate::model::UserModel;

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `user_id` - Primary key, also used to make `username` and `email` unique
pub fn mock_user_model(user_id: i32) -> UserModel {
    UserModel {
        id: user_id,
        username: format!("user{}", user_id),
        name: "Luke".to_string(),
        last_name: Some("Skywalker".to_string()),
        email: format!("user{}@example.com", user_id),
        password: "password".to_string(),
        is_active: true,
    }
}

//! Factory functions for generating mock favorite database models.

use chrono::Utc;
use entity::sea_orm_active_enums::FavoriteKind;

use crate::model::FavoriteModel;

/// Create a mock favorite database model for testing.
///
/// # Arguments
/// - `id` - Primary key of the favorite row
/// - `user_id` - The user owning the favorite
/// - `kind` - Which catalog table `target_id` refers to
/// - `target_id` - ID of the favorited entry
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        kind,
        target_id,
        created_at: Utc::now().naive_utc(),
    }
}

//! Repository for favorites, addressed by owner and catalog target.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{db::FavoriteModel, favorite::FavoriteTarget};

/// Queries and writes over the `favorite` table.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every favorite owned by a user, oldest first
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the favorite linking a user to a target, if any
    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(target.kind()))
            .filter(entity::favorite::Column::TargetId.eq(target.id()))
            .one(self.db)
            .await
    }

    /// Creates a favorite linking a user to a target
    ///
    /// Does not check for an existing favorite, see [`Self::find`].
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(target.kind()),
            target_id: ActiveValue::Set(target.id()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Deletes the favorite linking a user to a target
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(target.kind()))
            .filter(entity::favorite::Column::TargetId.eq(target.id()))
            .exec(self.db)
            .await
    }
}

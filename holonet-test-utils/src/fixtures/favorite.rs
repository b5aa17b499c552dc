//! Favorite fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::sea_orm_active_enums::FavoriteKind;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{error::TestError, model::FavoriteModel, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite for a user. The user must already exist.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set(kind),
                target_id: ActiveValue::Set(target_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Count favorite rows matching a user and target.
    pub async fn count(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<u64, TestError> {
        Ok(entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(kind))
            .filter(entity::favorite::Column::TargetId.eq(target_id))
            .count(&self.setup.db)
            .await?)
    }
}

//! User fixture utilities.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user built by [`factory::mock_user_model`].
    ///
    /// Username and email are derived from the ID so several users can be inserted
    /// without violating unique constraints.
    pub async fn insert_mock_user(&self, user_id: i32) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(user_id);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                id: ActiveValue::Set(user.id),
                username: ActiveValue::Set(user.username),
                name: ActiveValue::Set(user.name),
                last_name: ActiveValue::Set(user.last_name),
                email: ActiveValue::Set(user.email),
                password: ActiveValue::Set(user.password),
                is_active: ActiveValue::Set(user.is_active),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

//! Business rules for listing, adding and removing favorites.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{catalog::CatalogRepository, favorite::FavoriteRepository, user::UserRepository},
    error::{not_found::NotFoundError, Error},
    model::{
        db::FavoriteModel,
        favorite::{FavoriteOutcome, FavoriteTarget},
    },
};

/// Service for managing a user's favorites.
///
/// Every operation first checks that the user exists so a missing user is reported as
/// [`NotFoundError::User`] regardless of the target.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite owned by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteModel>)` - The user's favorites, possibly empty
    /// - `Err(Error::NotFoundError)` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteModel>, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        Ok(favorite_repo.get_by_user(user_id).await?)
    }

    /// Adds a catalog entry to a user's favorites.
    ///
    /// Adding a favorite the user already has leaves the table unchanged and returns
    /// [`FavoriteOutcome::AlreadyExists`].
    ///
    /// # Arguments
    /// - `user_id` - ID of the user adding the favorite
    /// - `target` - The person, planet or vehicle to add
    ///
    /// # Returns
    /// - `Ok(FavoriteOutcome::Added(_))` - A new favorite row was inserted
    /// - `Ok(FavoriteOutcome::AlreadyExists(_))` - The favorite was already present
    /// - `Err(Error::NotFoundError)` - User or target does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteOutcome, Error> {
        self.ensure_user_exists(user_id).await?;

        let catalog_repo = CatalogRepository::new(self.db);
        if !catalog_repo.exists(target).await? {
            return Err(NotFoundError::target(target).into());
        }

        let favorite_repo = FavoriteRepository::new(self.db);
        if let Some(existing) = favorite_repo.find(user_id, target).await? {
            tracing::debug!(
                user_id = %user_id,
                favorite_id = %existing.id,
                "Favorite {} already present",
                target
            );

            return Ok(FavoriteOutcome::AlreadyExists(existing));
        }

        let favorite = favorite_repo.create(user_id, target).await?;

        tracing::info!(
            user_id = %user_id,
            favorite_id = %favorite.id,
            "Added {} to favorites",
            target
        );

        Ok(FavoriteOutcome::Added(favorite))
    }

    /// Removes a catalog entry from a user's favorites.
    ///
    /// The target itself does not need to exist anymore, only the favorite row.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted
    /// - `Err(Error::NotFoundError)` - User or favorite does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let result = favorite_repo.delete(user_id, target).await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::favorite(user_id, target).into());
        }

        tracing::info!(user_id = %user_id, "Removed {} from favorites", target);

        Ok(())
    }

    /// Fails with [`NotFoundError::User`] unless the user exists.
    pub async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::User(user_id.into()).into()),
        }
    }
}

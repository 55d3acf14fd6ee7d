use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::listings::application::ports::incoming::use_cases::DeleteListingUseCase;
use crate::listings::application::ports::outgoing::ListingRepository;
use crate::users::application::ports::{
    incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};

/// Deletes a user by first deleting every owned listing through the listing
/// cascade — one listing at a time, so each listing's images are released —
/// and only then the user row. A failing child aborts the whole operation
/// with the user row untouched; listings already deleted stay deleted.
pub struct DeleteUserService<U, L>
where
    U: UserRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
{
    user_repository: U,
    listing_repository: L,
    delete_listing: Arc<dyn DeleteListingUseCase + Send + Sync>,
}

impl<U, L> DeleteUserService<U, L>
where
    U: UserRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
{
    pub fn new(
        user_repository: U,
        listing_repository: L,
        delete_listing: Arc<dyn DeleteListingUseCase + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            listing_repository,
            delete_listing,
        }
    }
}

#[async_trait]
impl<U, L> DeleteUserUseCase for DeleteUserService<U, L>
where
    U: UserRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError> {
        let user = self
            .user_repository
            .find_user_by_id(user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::UserNotFound)?;

        let listings = self
            .listing_repository
            .listings_by_author(user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?;

        let owned_listings = listings.len();

        for listing in listings {
            self.delete_listing
                .execute(listing.id)
                .await
                .map_err(|e| DeleteUserError::ListingDeletionFailed(e.to_string()))?;
        }

        self.user_repository
            .delete_user_row(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            user_id = %user_id,
            username = %user.username,
            owned_listings,
            "User deleted with owned listings"
        );
        Ok(())
    }
}

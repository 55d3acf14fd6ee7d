use async_trait::async_trait;
use uuid::Uuid;

use crate::listings::application::ports::{
    incoming::use_cases::{DeleteListingError, DeleteListingUseCase},
    outgoing::{
        ImageRepository, ImageStore, ListingRepository, ListingRepositoryError,
    },
};

/// Walks the listing's additional images one at a time — blob first, then
/// the row — before touching the listing row itself. A failing child aborts
/// the whole deletion with the listing row still in place.
pub struct DeleteListingService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    listing_repository: L,
    image_repository: I,
    image_store: S,
}

impl<L, I, S> DeleteListingService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(listing_repository: L, image_repository: I, image_store: S) -> Self {
        Self {
            listing_repository,
            image_repository,
            image_store,
        }
    }
}

#[async_trait]
impl<L, I, S> DeleteListingUseCase for DeleteListingService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, listing_id: Uuid) -> Result<(), DeleteListingError> {
        let listing = self
            .listing_repository
            .find_listing_by_id(listing_id)
            .await
            .map_err(|e| DeleteListingError::RepositoryError(e.to_string()))?
            .ok_or(DeleteListingError::ListingNotFound)?;

        let images = self
            .image_repository
            .images_for_listing(listing_id)
            .await
            .map_err(|e| DeleteListingError::RepositoryError(e.to_string()))?;

        for image in images {
            self.image_store
                .delete(&image.image)
                .await
                .map_err(|e| DeleteListingError::StorageError(e.to_string()))?;

            self.image_repository
                .delete_image_row(image.id)
                .await
                .map_err(|e| DeleteListingError::RepositoryError(e.to_string()))?;
        }

        // The primary image blob lives outside the database, so it is
        // released here; the row column disappears with the listing row.
        if let Some(reference) = &listing.image {
            self.image_store
                .delete(reference)
                .await
                .map_err(|e| DeleteListingError::StorageError(e.to_string()))?;
        }

        self.listing_repository
            .delete_listing_row(listing_id)
            .await
            .map_err(|e| match e {
                ListingRepositoryError::ListingNotFound => DeleteListingError::ListingNotFound,
                other => DeleteListingError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(listing_id = %listing_id, "Listing deleted");
        Ok(())
    }
}

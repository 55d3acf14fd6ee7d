use async_trait::async_trait;
use uuid::Uuid;

use crate::listings::application::ports::{
    incoming::use_cases::{
        GetSingleListingError, GetSingleListingUseCase, ListingDetails, ListingImageView,
    },
    outgoing::{ImageRepository, ImageStore, ListingRepository},
};

pub struct GetSingleListingService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    listing_repository: L,
    image_repository: I,
    image_store: S,
}

impl<L, I, S> GetSingleListingService<L, I, S>
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
impl<L, I, S> GetSingleListingUseCase for GetSingleListingService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(&self, listing_id: Uuid) -> Result<ListingDetails, GetSingleListingError> {
        let listing = self
            .listing_repository
            .find_listing_by_id(listing_id)
            .await
            .map_err(|e| GetSingleListingError::RepositoryError(e.to_string()))?
            .ok_or(GetSingleListingError::ListingNotFound)?;

        let primary_image_url = match &listing.image {
            Some(reference) => Some(
                self.image_store
                    .read_url(reference)
                    .await
                    .map_err(|e| GetSingleListingError::StorageError(e.to_string()))?,
            ),
            None => None,
        };

        let records = self
            .image_repository
            .images_for_listing(listing_id)
            .await
            .map_err(|e| GetSingleListingError::RepositoryError(e.to_string()))?;

        let mut images = Vec::with_capacity(records.len());
        for record in records {
            let url = self
                .image_store
                .read_url(&record.image)
                .await
                .map_err(|e| GetSingleListingError::StorageError(e.to_string()))?;
            images.push(ListingImageView {
                id: record.id,
                url,
            });
        }

        Ok(ListingDetails {
            listing,
            primary_image_url,
            images,
        })
    }
}

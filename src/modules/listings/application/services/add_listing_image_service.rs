use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::listings::application::ports::{
    incoming::use_cases::{AddListingImageError, AddListingImageUseCase, ImagePayload},
    outgoing::{
        timestamp_object_name, ImageRepository, ImageStore, ListingImageRecord, ListingRepository,
    },
};

pub struct AddListingImageService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    listing_repository: L,
    image_repository: I,
    image_store: S,
}

impl<L, I, S> AddListingImageService<L, I, S>
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
impl<L, I, S> AddListingImageUseCase for AddListingImageService<L, I, S>
where
    L: ListingRepository + Send + Sync,
    I: ImageRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        listing_id: Uuid,
        payload: ImagePayload,
    ) -> Result<ListingImageRecord, AddListingImageError> {
        if payload.data.is_empty() {
            return Err(AddListingImageError::EmptyImage);
        }

        self.listing_repository
            .find_listing_by_id(listing_id)
            .await
            .map_err(|e| AddListingImageError::RepositoryError(e.to_string()))?
            .ok_or(AddListingImageError::ListingNotFound)?;

        let object_name = timestamp_object_name(Utc::now(), &payload.extension);
        let reference = self
            .image_store
            .store(&object_name, payload.data)
            .await
            .map_err(|e| AddListingImageError::StorageError(e.to_string()))?;

        match self
            .image_repository
            .add_image(listing_id, reference.clone())
            .await
        {
            Ok(record) => Ok(record),
            Err(e) => {
                if let Err(cleanup) = self.image_store.delete(&reference).await {
                    tracing::warn!(
                        reference = %reference,
                        error = %cleanup,
                        "Failed to release stored image after a failed insert"
                    );
                }
                Err(AddListingImageError::RepositoryError(e.to_string()))
            }
        }
    }
}

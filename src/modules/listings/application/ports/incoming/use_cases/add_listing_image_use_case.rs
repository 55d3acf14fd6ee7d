use async_trait::async_trait;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::ListingImageRecord;

use super::ImagePayload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddListingImageError {
    #[error("Listing not found")]
    ListingNotFound,

    #[error("Image payload is empty")]
    EmptyImage,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddListingImageUseCase: Send + Sync {
    async fn execute(
        &self,
        listing_id: Uuid,
        payload: ImagePayload,
    ) -> Result<ListingImageRecord, AddListingImageError>;
}

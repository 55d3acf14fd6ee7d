use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::listings::application::ports::outgoing::ListingResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingImageView {
    pub id: Uuid,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingDetails {
    pub listing: ListingResult,
    pub primary_image_url: Option<String>,
    pub images: Vec<ListingImageView>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleListingError {
    #[error("Listing not found")]
    ListingNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleListingUseCase: Send + Sync {
    async fn execute(&self, listing_id: Uuid) -> Result<ListingDetails, GetSingleListingError>;
}

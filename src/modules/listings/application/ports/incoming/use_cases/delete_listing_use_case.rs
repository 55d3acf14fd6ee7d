use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteListingError {
    #[error("Listing not found")]
    ListingNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Deletes a listing after walking its additional images one at a time, so
/// every stored blob is released before the row goes away.
#[async_trait]
pub trait DeleteListingUseCase: Send + Sync {
    async fn execute(&self, listing_id: Uuid) -> Result<(), DeleteListingError>;
}

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingImageRecord {
    pub id: Uuid,
    pub listing_id: Uuid,
    /// Blob-store reference.
    pub image: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Image not found")]
    ImageNotFound,
}

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn add_image(
        &self,
        listing_id: Uuid,
        image: String,
    ) -> Result<ListingImageRecord, ImageRepositoryError>;

    async fn images_for_listing(
        &self,
        listing_id: Uuid,
    ) -> Result<Vec<ListingImageRecord>, ImageRepositoryError>;

    async fn delete_image_row(&self, image_id: Uuid) -> Result<(), ImageRepositoryError>;
}

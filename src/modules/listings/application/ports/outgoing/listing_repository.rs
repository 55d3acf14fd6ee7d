use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateListingData {
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub contacts: String,
    /// Blob-store reference of the primary image, if one was uploaded.
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingResult {
    pub id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub contacts: String,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListingRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Listing not found")]
    ListingNotFound,
}

#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn create_listing(
        &self,
        data: CreateListingData,
    ) -> Result<ListingResult, ListingRepositoryError>;

    async fn find_listing_by_id(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<ListingResult>, ListingRepositoryError>;

    async fn listings_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<ListingResult>, ListingRepositoryError>;

    /// Deletes exactly the listing row. Additional images are walked by the
    /// deletion use case beforehand; comments ride along at the engine level.
    async fn delete_listing_row(&self, listing_id: Uuid)
        -> Result<(), ListingRepositoryError>;
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Feed row: what the listing index needs, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub price: f64,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ListingQuery: Send + Sync {
    /// Active listings, newest first, optionally narrowed to one
    /// sub-category.
    async fn active_listings(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<ListingView>, ListingQueryError>;

    async fn category_has_listings(
        &self,
        category_id: Uuid,
    ) -> Result<bool, ListingQueryError>;
}

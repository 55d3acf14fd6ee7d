use async_trait::async_trait;
use uuid::Uuid;

use crate::categories::application::domain::entities::{Subcategory, TopLevelCategory};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The two read views over the shared category table.
#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Categories with no parent.
    async fn top_level(&self) -> Result<Vec<TopLevelCategory>, CategoryQueryError>;

    /// Categories with a parent, each paired with that parent.
    async fn subcategories(&self) -> Result<Vec<Subcategory>, CategoryQueryError>;

    async fn has_subcategories(&self, category_id: Uuid) -> Result<bool, CategoryQueryError>;
}
